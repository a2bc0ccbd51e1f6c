/// A chip as it appears in the selector row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayChip {
	pub value: String,
	pub selected: bool,
	/// Created by the user rather than taken from the known options.
	pub custom: bool,
}

/// Known options in their original order, followed by selected values that
/// are not known options, in the order they were added.
#[must_use]
pub fn display_chips(options: &[String], selected: &[String]) -> Vec<DisplayChip> {
	let known = options.iter().map(|option| DisplayChip {
		value: option.clone(),
		selected: selected.contains(option),
		custom: false,
	});
	let custom = selected
		.iter()
		.filter(|value| !options.contains(value))
		.map(|value| DisplayChip {
			value: value.clone(),
			selected: true,
			custom: true,
		});
	known.chain(custom).collect()
}

/// Remove `value` from the selection if present, otherwise append it. The
/// relative order of every other value is kept.
#[must_use]
pub fn toggle(selected: &[String], value: &str) -> Vec<String> {
	if selected.iter().any(|item| item == value) {
		selected
			.iter()
			.filter(|item| item.as_str() != value)
			.cloned()
			.collect()
	} else {
		let mut next = selected.to_vec();
		next.push(value.to_owned());
		next
	}
}

/// Outcome of committing the text typed in create mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	/// Nothing but whitespace was typed.
	Discard,
	/// The value is already selected, ignoring case.
	Duplicate,
	/// The value names a known option; carries the option's own casing.
	SelectKnown(String),
	/// A brand-new value, kept exactly as typed (trimmed).
	CreateNew(String),
}

/// Classify typed input against the known options and current selection.
/// All comparisons ignore case.
#[must_use]
pub fn resolve_submission(input: &str, options: &[String], selected: &[String]) -> Submission {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return Submission::Discard;
	}
	let wanted = trimmed.to_lowercase();
	if selected.iter().any(|value| value.to_lowercase() == wanted) {
		return Submission::Duplicate;
	}
	match options.iter().find(|option| option.to_lowercase() == wanted) {
		Some(option) => Submission::SelectKnown(option.clone()),
		None => Submission::CreateNew(trimmed.to_owned()),
	}
}
