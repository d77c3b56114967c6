//! 收銀機找零：全程使用整數「分」計算，避免浮點誤差。

use crate::utils::error::{KataError, Result};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const KATA: &str = "exact-change";

/// 以分為單位的精確金額
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(pub u64);

impl Cents {
    /// 解析像 "19.50" 的十進位金額，最多兩位小數
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !digits_only(whole)
            || !digits_only(fraction)
            || fraction.len() > 2
        {
            return Err(KataError::invalid_input(
                KATA,
                format!("'{}' is not an amount with at most two decimals", input),
            ));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| KataError::invalid_input(KATA, format!("'{}' is too large", input)))?
        };
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().unwrap_or(0) * 10,
            _ => fraction.parse::<u64>().unwrap_or(0),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Cents)
            .ok_or_else(|| KataError::invalid_input(KATA, format!("'{}' is too large", input)))
    }
}

impl FromStr for Cents {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        Cents::parse(s)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Cents {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    Penny,
    Nickel,
    Dime,
    Quarter,
    One,
    Five,
    Ten,
    Twenty,
    OneHundred,
}

impl Denomination {
    /// 由小到大
    pub const ALL: [Denomination; 9] = [
        Denomination::Penny,
        Denomination::Nickel,
        Denomination::Dime,
        Denomination::Quarter,
        Denomination::One,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::OneHundred,
    ];

    pub fn value(self) -> Cents {
        Cents(match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::One => 100,
            Denomination::Five => 500,
            Denomination::Ten => 1000,
            Denomination::Twenty => 2000,
            Denomination::OneHundred => 10000,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Denomination::Penny => "PENNY",
            Denomination::Nickel => "NICKEL",
            Denomination::Dime => "DIME",
            Denomination::Quarter => "QUARTER",
            Denomination::One => "ONE",
            Denomination::Five => "FIVE",
            Denomination::Ten => "TEN",
            Denomination::Twenty => "TWENTY",
            Denomination::OneHundred => "ONE HUNDRED",
        }
    }
}

impl FromStr for Denomination {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace(['_', '-'], " ");
        Denomination::ALL
            .into_iter()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| KataError::invalid_input(KATA, format!("unknown denomination '{}'", s)))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Denomination {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// 每種面額在抽屜裡的總金額
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drawer {
    slots: BTreeMap<Denomination, Cents>,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 總額必須是面額的整數倍
    pub fn with(mut self, denomination: Denomination, amount: Cents) -> Result<Self> {
        self.insert(denomination, amount)?;
        Ok(self)
    }

    pub fn insert(&mut self, denomination: Denomination, amount: Cents) -> Result<()> {
        if amount.0 % denomination.value().0 != 0 {
            return Err(KataError::invalid_input(
                KATA,
                format!("{} is not a multiple of {}", amount, denomination),
            ));
        }
        self.slots.insert(denomination, amount);
        Ok(())
    }

    /// 解析 "QUARTER=4.25,ONE=90" 這類的清單
    pub fn parse(input: &str) -> Result<Self> {
        let mut drawer = Drawer::new();
        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, amount) = entry.split_once('=').ok_or_else(|| {
                KataError::invalid_input(KATA, format!("'{}' should look like NAME=AMOUNT", entry))
            })?;
            drawer.insert(name.parse()?, Cents::parse(amount)?)?;
        }
        Ok(drawer)
    }

    pub fn amount(&self, denomination: Denomination) -> Cents {
        self.slots.get(&denomination).copied().unwrap_or_default()
    }

    pub fn total(&self) -> Cents {
        Cents(self.slots.values().map(|c| c.0).sum())
    }

    /// 所有面額（包含零），由小到大
    pub fn contents(&self) -> Vec<ChangeEntry> {
        Denomination::ALL
            .into_iter()
            .map(|denomination| ChangeEntry {
                denomination,
                amount: self.amount(denomination),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    pub denomination: Denomination,
    pub amount: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "change", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disbursement {
    InsufficientFunds,
    /// 找零後抽屜清空
    Closed(Vec<ChangeEntry>),
    /// 由大面額到小面額
    Open(Vec<ChangeEntry>),
}

pub fn check_cash_register(price: Cents, cash: Cents, drawer: &Drawer) -> Result<Disbursement> {
    if cash < price {
        return Err(KataError::invalid_input(
            KATA,
            format!("cash {} does not cover price {}", cash, price),
        ));
    }

    let due = cash.0 - price.0;
    let total = drawer.total().0;

    if total < due {
        return Ok(Disbursement::InsufficientFunds);
    }
    if total == due {
        return Ok(Disbursement::Closed(drawer.contents()));
    }

    let mut remaining = due;
    let mut change = Vec::new();

    for denomination in Denomination::ALL.into_iter().rev() {
        let value = denomination.value().0;
        let available = drawer.amount(denomination).0;
        let take = available.min(remaining / value * value);
        if take > 0 {
            remaining -= take;
            change.push(ChangeEntry {
                denomination,
                amount: Cents(take),
            });
        }
    }

    if remaining > 0 {
        tracing::debug!("Unable to make exact change, {} cents short", remaining);
        return Ok(Disbursement::InsufficientFunds);
    }

    Ok(Disbursement::Open(change))
}
