use std::collections::BTreeMap;

use hold_store::schema::NO_REASON;
use hold_store::{HoldingInvoice, InvoiceStatistics};

/// Builds the reason histogram and picks the most common reason.
///
/// The distribution is ordered by reason, so taking the first maximum breaks
/// ties toward the lexicographically smallest reason. An empty slice yields
/// zero counts and [`NO_REASON`].
#[must_use]
pub fn summarize(invoices: &[HoldingInvoice]) -> InvoiceStatistics {
    let mut reason_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for invoice in invoices {
        *reason_distribution.entry(invoice.reason.clone()).or_default() += 1;
    }

    let (most_common_reason, most_common_count) = reason_distribution
        .iter()
        .fold(None::<(&String, usize)>, |best, (reason, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((reason, count)),
        })
        .map_or_else(|| (NO_REASON.to_string(), 0), |(reason, count)| (reason.clone(), count));

    InvoiceStatistics {
        total: invoices.len(),
        unique_reasons: reason_distribution.len(),
        reason_distribution,
        most_common_reason,
        most_common_count,
    }
}

#[cfg(test)]
mod tests {
    use hold_store::schema::STATUS_HOLDING;

    use super::*;

    fn invoices(reasons: &[&str]) -> Vec<HoldingInvoice> {
        reasons
            .iter()
            .enumerate()
            .map(|(index, reason)| HoldingInvoice {
                id: format!("INV-{:03}", index + 1),
                status: STATUS_HOLDING.to_string(),
                reason: (*reason).to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_input_falls_back_to_no_reason() {
        let stats = summarize(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique_reasons, 0);
        assert_eq!(stats.most_common_count, 0);
        assert_eq!(stats.most_common_reason, NO_REASON);
        assert!(stats.reason_distribution.is_empty());
    }

    #[test]
    fn counts_repeated_reasons() {
        let stats = summarize(&invoices(&["예산 초과", "재고 부족", "예산 초과"]));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.unique_reasons, 2);
        assert_eq!(stats.reason_distribution["예산 초과"], 2);
        assert_eq!(stats.most_common_reason, "예산 초과");
        assert_eq!(stats.most_common_count, 2);
    }

    #[test]
    fn ties_break_toward_smallest_reason() {
        let stats = summarize(&invoices(&["zeta", "alpha", "zeta", "alpha", "mid"]));

        assert_eq!(stats.most_common_reason, "alpha");
        assert_eq!(stats.most_common_count, 2);
    }
}
