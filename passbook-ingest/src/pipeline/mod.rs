//! Generic statement extraction pipeline.
//!
//! raw text -> noise filter -> chunker -> per chunk: extract, resolve, clean
//!
//! One [`Pipeline`] is built from a [`BankProfile`]; the stages never look
//! at which bank they are running for.

pub mod chunker;
pub mod cleaner;
pub mod extract;
pub mod noise;
pub mod resolver;

use anyhow::{Context, Result};
use log::{debug, info};
use passbook_core::{Bank, Transaction};
use regex::Regex;

use crate::profile::BankProfile;
use cleaner::{CleanerPatterns, REF_NO_PATTERN};
use extract::AMOUNT_PATTERN;

/// A bank profile with its patterns compiled
#[derive(Debug, Clone)]
pub struct Pipeline {
    profile: BankProfile,
    date_re: Regex,
    amount_re: Regex,
    ref_re: Regex,
    noise: Vec<Regex>,
    footers: Vec<Regex>,
    artifacts: Vec<Regex>,
}

/// Running state threaded through the chunk fold
#[derive(Debug, Default)]
struct Ledger {
    previous_balance: Option<f64>,
    next_id: u32,
    transactions: Vec<Transaction>,
}

fn compile_all(patterns: &[String], case_insensitive: bool) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            let src = if case_insensitive { format!("(?i){p}") } else { p.clone() };
            Regex::new(&src).with_context(|| format!("compiling pattern {p:?}"))
        })
        .collect()
}

impl Pipeline {
    pub fn new(profile: BankProfile) -> Result<Self> {
        let date_re = Regex::new(&profile.date_pattern)
            .with_context(|| format!("compiling date pattern {:?}", profile.date_pattern))?;

        Ok(Self {
            date_re,
            amount_re: Regex::new(AMOUNT_PATTERN)?,
            ref_re: Regex::new(REF_NO_PATTERN)?,
            noise: compile_all(&profile.noise_patterns, true).context("noise catalog")?,
            footers: compile_all(&profile.footer_patterns, true).context("footer catalog")?,
            artifacts: compile_all(&profile.artifact_patterns, false).context("artifact catalog")?,
            profile,
        })
    }

    pub fn bank(&self) -> Bank {
        self.profile.bank
    }

    pub fn profile(&self) -> &BankProfile {
        &self.profile
    }

    /// Extract transactions from a full statement text, in document order.
    ///
    /// Chunks without an amount/balance pair are skipped; the result may be
    /// empty.
    pub fn parse(&self, text: &str) -> Vec<Transaction> {
        let cleaned = noise::filter_noise(text, &self.noise);
        let chunks = chunker::split_chunks(&cleaned, &self.date_re);
        let chunk_count = chunks.len();

        let start = Ledger {
            next_id: 1,
            ..Ledger::default()
        };
        let ledger = chunks
            .into_iter()
            .fold(start, |ledger, chunk| self.step(ledger, chunk));

        info!(
            "{}: {} transactions from {} chunks",
            self.bank(),
            ledger.transactions.len(),
            chunk_count
        );
        ledger.transactions
    }

    fn step(&self, mut ledger: Ledger, chunk: &str) -> Ledger {
        let Some(fields) = extract::extract_fields(
            chunk,
            &self.date_re,
            &self.amount_re,
            self.profile.trailing_money_columns,
        ) else {
            debug!("skipping chunk without amount/balance: {:?}", chunk.trim());
            return ledger;
        };

        let resolution = resolver::resolve(
            ledger.previous_balance,
            fields.amount,
            fields.balance,
            chunk,
            &self.profile.keywords,
            self.profile.tolerance,
        );
        debug!(
            "{} {} -> {:?} via {:?}",
            fields.date, fields.amount_token, resolution.direction, resolution.method
        );

        let patterns = CleanerPatterns {
            amount: &self.amount_re,
            ref_no: &self.ref_re,
            footers: &self.footers,
            artifacts: &self.artifacts,
        };
        let cleaned = cleaner::clean_chunk(chunk, &fields, &patterns);

        ledger.transactions.push(Transaction::new(
            ledger.next_id,
            fields.date,
            cleaned.description,
            cleaned.ref_no,
            resolution.direction,
            fields.amount,
            fields.balance,
        ));
        ledger.previous_balance = Some(fields.balance);
        ledger.next_id += 1;
        ledger
    }
}
