//! freeCodeCamp 風格的演算法練習。每個函式都是獨立、無狀態的轉換。

pub mod binary;
pub mod exact_change;
pub mod friendly_dates;
pub mod inventory;
pub mod pairwise;
pub mod permutations;
pub mod phone;
pub mod pig_latin;
pub mod statistics;
pub mod steamroller;
pub mod sym_diff;
pub mod truthy;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kata {
    BinaryDecode,
    BinaryEncode,
    ExactChange,
    FriendlyDates,
    Inventory,
    Statistics,
    NoRepeats,
    Pairwise,
    PigLatin,
    Steamroller,
    SymDiff,
    Phone,
    TruthCheck,
}

impl Kata {
    pub fn all() -> &'static [Kata] {
        &[
            Kata::BinaryDecode,
            Kata::BinaryEncode,
            Kata::ExactChange,
            Kata::FriendlyDates,
            Kata::Inventory,
            Kata::Statistics,
            Kata::NoRepeats,
            Kata::Pairwise,
            Kata::PigLatin,
            Kata::Steamroller,
            Kata::SymDiff,
            Kata::Phone,
            Kata::TruthCheck,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Kata::BinaryDecode => "binary-decode",
            Kata::BinaryEncode => "binary-encode",
            Kata::ExactChange => "exact-change",
            Kata::FriendlyDates => "friendly-dates",
            Kata::Inventory => "inventory",
            Kata::Statistics => "statistics",
            Kata::NoRepeats => "no-repeats",
            Kata::Pairwise => "pairwise",
            Kata::PigLatin => "pig-latin",
            Kata::Steamroller => "steamroller",
            Kata::SymDiff => "sym-diff",
            Kata::Phone => "phone",
            Kata::TruthCheck => "truth-check",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Kata::BinaryDecode => "Decode space-separated binary bytes into text",
            Kata::BinaryEncode => "Encode text as space-separated binary bytes",
            Kata::ExactChange => "Make change from a cash drawer in exact cents",
            Kata::FriendlyDates => "Format a date range the way people say it",
            Kata::Inventory => "Merge a delivery into the current inventory",
            Kata::Statistics => "Mean, median, modes and spread of a sample",
            Kata::NoRepeats => "Count permutations without adjacent repeats",
            Kata::Pairwise => "Sum the indices of pairs adding up to a target",
            Kata::PigLatin => "Translate words into pig latin",
            Kata::Steamroller => "Flatten arbitrarily nested JSON arrays",
            Kata::SymDiff => "Symmetric difference of several sets",
            Kata::Phone => "Validate a US telephone number",
            Kata::TruthCheck => "Check that every object has a truthy property",
        }
    }
}

impl fmt::Display for Kata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
