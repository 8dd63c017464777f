//! Token estimation and cost accounting.

/// Prices are USD cents per million tokens so the arithmetic stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostCalculator {
    pub input_cents_per_million: u64,
    pub output_cents_per_million: u64,
    pub rupiah_per_usd: u64,
}

impl Default for CostCalculator {
    fn default() -> Self {
        // $3 / $15 per million tokens.
        Self {
            input_cents_per_million: 300,
            output_cents_per_million: 1500,
            rupiah_per_usd: 16_000,
        }
    }
}

impl CostCalculator {
    /// Cost in Rupiah, rounded up to the next whole Rupiah.
    pub fn cost_in_rupiah(&self, input_tokens: u64, output_tokens: u64) -> u64 {
        let cents = input_tokens.saturating_mul(self.input_cents_per_million)
            .saturating_add(output_tokens.saturating_mul(self.output_cents_per_million));
        let scaled = cents.saturating_mul(self.rupiah_per_usd);
        scaled.div_ceil(100 * 1_000_000)
    }
}

/// Quick input-token estimate: one token per four characters, rounded up.
pub fn estimate_input_tokens(prompt: &str) -> u64 {
    (prompt.chars().count() as u64).div_ceil(4)
}

/// Word-based estimate used when the token-counting endpoint is unavailable.
pub fn approximate_token_count(text: &str) -> u64 {
    let words = text.split_whitespace().count() as u64;
    (words * 13).div_ceil(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_rounds_up_to_whole_rupiah() {
        let calc = CostCalculator::default();
        assert_eq!(calc.cost_in_rupiah(1_000, 500), 168);
        assert_eq!(calc.cost_in_rupiah(1, 0), 1);
        assert_eq!(calc.cost_in_rupiah(0, 0), 0);
        assert_eq!(calc.cost_in_rupiah(1_000_000, 1_000_000), 288_000);
    }

    #[test]
    fn input_estimate_is_char_based() {
        assert_eq!(estimate_input_tokens(""), 0);
        assert_eq!(estimate_input_tokens("abcd"), 1);
        assert_eq!(estimate_input_tokens("abcde"), 2);
        assert_eq!(estimate_input_tokens("éééé"), 1);
    }

    #[test]
    fn word_estimate_scales_by_1_3() {
        assert_eq!(approximate_token_count("satu dua tiga"), 4);
        assert_eq!(approximate_token_count("  satu\n\ndua  "), 3);
        assert_eq!(approximate_token_count("   "), 0);
    }
}
