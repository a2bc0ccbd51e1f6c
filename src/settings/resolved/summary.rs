use ffui::table::cells::StatusFallback;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let table = &config.options.table;
	let chips = &config.options.chips;

	println!("Effective configuration:");
	match table.page_size {
		0 => println!("  Page size: (paging disabled)"),
		size => println!("  Page size: {size}"),
	}
	println!("  Row key: {}", table.row_key);
	println!("  Empty text: {}", table.empty_text);
	println!("  Selectable: {}", bool_to_word(table.selectable));
	println!("  Edit action: {}", bool_to_word(table.actions.edit));
	println!("  Delete action: {}", bool_to_word(table.actions.delete));
	println!(
		"  Unknown status: {}",
		match table.status_fallback {
			StatusFallback::Active => "active",
			StatusFallback::Neutral => "neutral",
		}
	);
	println!("  Allow new chips: {}", bool_to_word(chips.allow_create));
	if let Some(label) = &chips.label {
		println!("  Chips label: {label}");
	}
	if let Some(text) = &chips.helper_text {
		println!("  Helper text: {text}");
	}
	println!("  UI theme: {}", config.theme_name);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
