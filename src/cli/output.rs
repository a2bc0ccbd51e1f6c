use anyhow::Result;
use ffui::Outcome;
use ffui::table::row::RowKey;

fn join_keys(keys: &[RowKey]) -> String {
	keys.iter()
		.map(RowKey::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &Outcome) {
	if !outcome.accepted {
		println!("Cancelled");
		return;
	}

	if outcome.selected.is_empty() {
		println!("No rows selected");
	} else {
		println!("Selected: {}", join_keys(&outcome.selected));
	}
	if !outcome.chips.is_empty() {
		println!("Chips: {}", outcome.chips.join(", "));
	}
	if !outcome.deleted.is_empty() {
		println!("Deleted: {}", join_keys(&outcome.deleted));
	}
	if !outcome.edited.is_empty() {
		println!("Edited: {}", join_keys(&outcome.edited));
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
