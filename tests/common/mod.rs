#![allow(dead_code)]

use wordrank_core::types::RankEntry;

/// Install a terminal logger once per test binary.
pub fn init_logging() {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    // Another test in the same binary may have set it already.
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

/// Small deterministic generator so property-style tests replay exactly.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Word of 1..=max_len characters drawn from `alphabet`.
    pub fn word(&mut self, alphabet: &[char], max_len: usize) -> String {
        let len = 1 + self.below(max_len as u64) as usize;
        (0..len)
            .map(|_| alphabet[self.below(alphabet.len() as u64) as usize])
            .collect()
    }
}

pub fn entry(word: &str, count: u64) -> RankEntry {
    RankEntry::new(word, count)
}

pub fn assert_non_increasing(entries: &[RankEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "{:?} ranked before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Entries as a sorted list of pairs, for multiset comparison.
pub fn as_multiset(entries: &[RankEntry]) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = entries.iter().map(|e| (e.word.clone(), e.count)).collect();
    pairs.sort();
    pairs
}
