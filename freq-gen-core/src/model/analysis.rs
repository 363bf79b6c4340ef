use std::collections::HashMap;

use super::frequency_table::FrequencyTable;

/// Renders the observed-vs-expected frequency report for one generation run.
///
/// One line per table token, in table order:
/// `<token> <observed/drawn:5 decimals> <frequency/total:5 decimals>`.
/// Tokens that were never drawn still get a line with `0.00000`.
///
/// `drawn_total` is the number of tokens produced by the run; a zero value
/// (nothing was generated) yields an empirical frequency of zero everywhere.
pub(super) fn frequency_report(
	table: &FrequencyTable,
	observed: &HashMap<String, u64>,
	drawn_total: usize,
) -> String {
	let total = table.total_frequency();
	let mut report = String::new();

	for (token, frequency) in table.entries() {
		let count = observed.get(token).copied().unwrap_or(0);
		let empirical = if drawn_total == 0 {
			0.0
		} else {
			count as f64 / drawn_total as f64
		};
		let theoretical = if total == 0 {
			0.0
		} else {
			frequency as f64 / total as f64
		};
		report.push_str(&format!("{} {:.5} {:.5}\n", token, empirical, theoretical));
	}

	report
}
