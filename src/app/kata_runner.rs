use crate::config::cli::KataCommand;
use crate::katas::exact_change::{check_cash_register, Drawer};
use crate::katas::inventory::{update_inventory, Item};
use crate::katas::{
    binary, friendly_dates, pairwise, permutations, phone, pig_latin, statistics, steamroller,
    sym_diff, truthy, Kata,
};
use crate::utils::error::{KataError, Result};
use serde_json::{json, Value};

fn parse_json<T: serde::de::DeserializeOwned>(kata: Kata, field: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| {
        KataError::invalid_input(kata.name(), format!("--{} is not valid JSON: {}", field, e))
    })
}

/// 逗號分隔的集合；全部都是整數時以數字輸出
fn run_sym_diff(sets: &[String]) -> Value {
    let split: Vec<Vec<String>> = sets
        .iter()
        .map(|set| {
            set.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect();

    let numeric: Option<Vec<Vec<i64>>> = split
        .iter()
        .map(|set| set.iter().map(|item| item.parse().ok()).collect())
        .collect();

    match numeric {
        Some(numbers) => json!(sym_diff::sym(&numbers)),
        None => json!(sym_diff::sym(&split)),
    }
}

/// 執行指定的練習並回傳 JSON 結果；`current_year` 供 friendly-dates 在未指定年份時使用
pub fn run_kata(command: &KataCommand, current_year: i32) -> Result<Value> {
    let value = match command {
        KataCommand::List => json!(Kata::all()
            .iter()
            .map(|kata| json!({ "name": kata.name(), "summary": kata.summary() }))
            .collect::<Vec<_>>()),
        KataCommand::BinaryDecode { binary: encoded } => json!(binary::binary_decode(encoded)?),
        KataCommand::BinaryEncode { text } => json!(binary::binary_encode(text)),
        KataCommand::ExactChange {
            price,
            cash,
            drawer,
        } => {
            let drawer = Drawer::parse(drawer)?;
            serde_json::to_value(check_cash_register(*price, *cash, &drawer)?)?
        }
        KataCommand::FriendlyDates {
            start,
            end,
            current_year: year,
        } => json!(friendly_dates::make_friendly_dates(
            start,
            end,
            year.unwrap_or(current_year)
        )?),
        KataCommand::Inventory { current, delivery } => {
            let current: Vec<Item> = parse_json(Kata::Inventory, "current", current)?;
            let delivery: Vec<Item> = parse_json(Kata::Inventory, "delivery", delivery)?;
            json!(update_inventory(&current, &delivery))
        }
        KataCommand::Statistics { values } => serde_json::to_value(statistics::summarize(values)?)?,
        KataCommand::NoRepeats { text } => {
            json!(permutations::count_no_repeat_permutations(text)?)
        }
        KataCommand::Pairwise { target, values } => json!(pairwise::pairwise(values, *target)),
        KataCommand::PigLatin { words } => {
            json!(pig_latin::translate_sentence(&words.join(" "))?)
        }
        KataCommand::Steamroller { json: raw } => {
            let nested: Value = parse_json(Kata::Steamroller, "json", raw)?;
            json!(steamroller::steamroll(&nested))
        }
        KataCommand::SymDiff { sets } => run_sym_diff(sets),
        KataCommand::Phone { number } => json!(phone::is_valid_us_phone(number)),
        KataCommand::TruthCheck {
            collection,
            predicate,
        } => {
            let collection: Vec<Value> = parse_json(Kata::TruthCheck, "collection", collection)?;
            json!(truthy::truth_check(&collection, predicate))
        }
    };

    Ok(value)
}
