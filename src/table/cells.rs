use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use serde::Deserialize;
use serde_json::Value;

use super::column::{Column, RenderKind};
use super::row::DataRow;
use crate::theme::Theme;

/// Shown for missing, null or unrenderable values.
pub const PLACEHOLDER: &str = "—";

/// Known row statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Active,
	Inactive,
	Pending,
}

impl Status {
	#[must_use]
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"active" => Some(Self::Active),
			"inactive" => Some(Self::Inactive),
			"pending" => Some(Self::Pending),
			_ => None,
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Active => "Active",
			Self::Inactive => "Inactive",
			Self::Pending => "Pending",
		}
	}

	fn style(self, theme: &Theme) -> Style {
		match self {
			Self::Active => theme.status_active,
			Self::Inactive => theme.status_inactive,
			Self::Pending => theme.status_pending,
		}
	}
}

/// How a status value outside [`Status`] is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFallback {
	/// Draw it as "Active".
	#[default]
	Active,
	/// Draw the raw text in a muted style.
	Neutral,
}

/// Cell renderer shared by every column of a table.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
	pub theme: &'a Theme,
	pub status_fallback: StatusFallback,
}

impl CellContext<'_> {
	/// Render the cell for `column` in `row`. A custom renderer on the column
	/// takes precedence over the built-in kinds.
	#[must_use]
	pub fn render(&self, column: &Column, row: &DataRow) -> Line<'static> {
		let line = match &column.renderer {
			Some(renderer) => Some(renderer(row)),
			None => self.render_kind(column, row),
		};
		let line = line.unwrap_or_else(|| self.placeholder());
		if line.alignment.is_some() {
			line
		} else {
			line.alignment(column.align.into())
		}
	}

	fn render_kind(&self, column: &Column, row: &DataRow) -> Option<Line<'static>> {
		let value = row.get(&column.key);
		match column.kind {
			RenderKind::Text => value.and_then(plain_text).map(Line::from),
			RenderKind::Bold => value
				.and_then(plain_text)
				.map(|text| Line::from(Span::styled(text, Style::new().add_modifier(Modifier::BOLD)))),
			RenderKind::Number => value.and_then(format_value_number).map(Line::from),
			RenderKind::Avatar => {
				let name = column
					.related
					.name
					.as_deref()
					.and_then(|field| row.text(field))
					.or_else(|| value.and_then(plain_text).filter(|text| !looks_like_image(text)))?;
				Some(Line::from(self.avatar(&name)?))
			}
			RenderKind::NameWithAvatar => {
				let name = value.and_then(plain_text)?;
				let mut spans = Vec::with_capacity(4);
				if let Some(badge) = self.avatar(&name) {
					spans.push(badge);
					spans.push(Span::raw(" "));
				}
				spans.push(Span::styled(
					name,
					Style::new().add_modifier(Modifier::BOLD),
				));
				if let Some(secondary) = column
					.related
					.secondary
					.as_deref()
					.and_then(|field| row.text(field))
				{
					spans.push(Span::styled(
						format!("  {secondary}"),
						self.theme.placeholder_style(),
					));
				}
				Some(Line::from(spans))
			}
			RenderKind::Chips => self.chips(value?),
			RenderKind::Status => self.status(value?),
		}
	}

	fn placeholder(&self) -> Line<'static> {
		Line::from(Span::styled(PLACEHOLDER, self.theme.placeholder_style()))
	}

	fn avatar(&self, name: &str) -> Option<Span<'static>> {
		let initials = initials(name)?;
		Some(Span::styled(format!(" {initials} "), self.theme.avatar))
	}

	fn chips(&self, value: &Value) -> Option<Line<'static>> {
		let Value::Array(items) = value else {
			return None;
		};
		let mut spans = Vec::with_capacity(items.len() * 2);
		for (label, tag) in items.iter().filter_map(chip_entry) {
			if !spans.is_empty() {
				spans.push(Span::raw(" "));
			}
			spans.push(Span::styled(
				format!(" {label} "),
				self.theme.tagged_chip_style(tag),
			));
		}
		if spans.is_empty() {
			None
		} else {
			Some(Line::from(spans))
		}
	}

	fn status(&self, value: &Value) -> Option<Line<'static>> {
		let raw = plain_text(value)?;
		let span = match (Status::parse(&raw), self.status_fallback) {
			(Some(status), _) => badge(status.label(), status.style(self.theme)),
			(None, StatusFallback::Active) => {
				badge(Status::Active.label(), Status::Active.style(self.theme))
			}
			(None, StatusFallback::Neutral) => badge(raw.trim(), self.theme.status_unknown),
		};
		Some(Line::from(span))
	}
}

fn badge(label: &str, style: Style) -> Span<'static> {
	Span::styled(format!("● {label}"), style)
}

fn plain_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}

fn looks_like_image(text: &str) -> bool {
	text.contains("://") || text.starts_with('/') || text.starts_with("data:")
}

fn chip_entry(item: &Value) -> Option<(String, Option<Color>)> {
	match item {
		Value::String(label) if !label.trim().is_empty() => Some((label.clone(), None)),
		Value::Object(fields) => {
			let label = fields.get("label").and_then(Value::as_str)?;
			let tag = ["color", "color_tag", "colorTag"]
				.iter()
				.find_map(|field| fields.get(*field).and_then(Value::as_str))
				.and_then(|tag| Color::from_str(tag).ok());
			Some((label.to_owned(), tag))
		}
		_ => None,
	}
}

/// Up to two upper-cased initials taken from the first words of `name`.
#[must_use]
pub fn initials(name: &str) -> Option<String> {
	let initials: String = name
		.split_whitespace()
		.filter_map(|word| word.chars().next())
		.take(2)
		.flat_map(char::to_uppercase)
		.collect();
	if initials.is_empty() {
		None
	} else {
		Some(initials)
	}
}

/// Format a JSON number (or numeric string) with en-US digit grouping.
#[must_use]
pub fn format_value_number(value: &Value) -> Option<String> {
	match value {
		Value::Number(number) => {
			if let Some(int) = number.as_i64() {
				Some(format_integer(i128::from(int)))
			} else if let Some(int) = number.as_u64() {
				Some(format_integer(i128::from(int)))
			} else {
				number.as_f64().map(format_number)
			}
		}
		Value::String(text) => {
			let text = text.trim();
			if let Ok(int) = text.parse::<i64>() {
				Some(format_integer(i128::from(int)))
			} else {
				text.parse::<f64>()
					.ok()
					.filter(|number| number.is_finite())
					.map(format_number)
			}
		}
		_ => None,
	}
}

fn format_integer(value: i128) -> String {
	let grouped = group_digits(&value.unsigned_abs().to_string());
	if value < 0 {
		format!("-{grouped}")
	} else {
		grouped
	}
}

/// Group the integer part and keep at most three fraction digits.
#[must_use]
pub fn format_number(value: f64) -> String {
	if !value.is_finite() {
		return PLACEHOLDER.to_owned();
	}
	let rounded = (value.abs() * 1000.0).round() / 1000.0;
	let text = format!("{rounded:.3}");
	let (int_part, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
	let fraction = fraction.trim_end_matches('0');

	let mut out = String::new();
	if value < 0.0 && rounded != 0.0 {
		out.push('-');
	}
	out.push_str(&group_digits(int_part));
	if !fraction.is_empty() {
		out.push('.');
		out.push_str(fraction);
	}
	out
}

fn group_digits(digits: &str) -> String {
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (idx, ch) in digits.chars().enumerate() {
		if idx > 0 && (digits.len() - idx) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::table::column::RelatedKeys;
	use serde_json::json;

	fn render(column: &Column, row: &DataRow, fallback: StatusFallback) -> String {
		let theme = Theme::default();
		let context = CellContext {
			theme: &theme,
			status_fallback: fallback,
		};
		context.render(column, row).to_string()
	}

	#[test]
	fn numbers_are_grouped() {
		assert_eq!(format_value_number(&json!(1234567)).as_deref(), Some("1,234,567"));
		assert_eq!(format_value_number(&json!(-9876)).as_deref(), Some("-9,876"));
		assert_eq!(format_value_number(&json!(999)).as_deref(), Some("999"));
		assert_eq!(format_value_number(&json!(1234.5)).as_deref(), Some("1,234.5"));
		assert_eq!(format_value_number(&json!(0.12345)).as_deref(), Some("0.123"));
		assert_eq!(format_value_number(&json!("42000")).as_deref(), Some("42,000"));
		assert_eq!(format_value_number(&json!("n/a")), None);
	}

	#[test]
	fn initials_use_first_two_words() {
		assert_eq!(initials("ann marie smith").as_deref(), Some("AM"));
		assert_eq!(initials("Bo").as_deref(), Some("B"));
		assert_eq!(initials("   "), None);
	}

	#[test]
	fn missing_values_render_placeholder() {
		let row = DataRow::from_pairs([("id", json!(1))]);
		for kind in [
			RenderKind::Text,
			RenderKind::Bold,
			RenderKind::Number,
			RenderKind::Avatar,
			RenderKind::NameWithAvatar,
			RenderKind::Chips,
			RenderKind::Status,
		] {
			let column = Column::new("name", "Name").kind(kind);
			assert_eq!(render(&column, &row, StatusFallback::Active), PLACEHOLDER, "{kind:?}");
		}
	}

	#[test]
	fn chips_accept_strings_and_tagged_objects() {
		let row = DataRow::from_pairs([(
			"teams",
			json!(["Sales", {"label": "Ops", "color": "green"}, 5, {"color": "red"}]),
		)]);
		let column = Column::new("teams", "Teams").kind(RenderKind::Chips);
		assert_eq!(render(&column, &row, StatusFallback::Active), " Sales   Ops ");
	}

	#[test]
	fn unknown_status_follows_fallback() {
		let row = DataRow::from_pairs([("status", json!("archived"))]);
		let column = Column::new("status", "Status").kind(RenderKind::Status);
		assert_eq!(render(&column, &row, StatusFallback::Active), "● Active");
		assert_eq!(render(&column, &row, StatusFallback::Neutral), "● archived");

		let pending = DataRow::from_pairs([("status", json!("PENDING"))]);
		assert_eq!(render(&column, &pending, StatusFallback::Neutral), "● Pending");
	}

	#[test]
	fn avatar_prefers_related_name_over_image_reference() {
		let row = DataRow::from_pairs([
			("photo", json!("https://cdn.example/ann.png")),
			("name", json!("Ann Lee")),
		]);
		let column = Column::new("photo", "").kind(RenderKind::Avatar).related(RelatedKeys {
			name: Some("name".into()),
			secondary: None,
		});
		assert_eq!(render(&column, &row, StatusFallback::Active), " AL ");

		let unnamed = Column::new("photo", "").kind(RenderKind::Avatar);
		assert_eq!(render(&unnamed, &row, StatusFallback::Active), PLACEHOLDER);
	}

	#[test]
	fn name_with_avatar_includes_secondary_text() {
		let row = DataRow::from_pairs([("name", json!("Cy Young")), ("team", json!("Ops"))]);
		let column = Column::new("name", "Member")
			.kind(RenderKind::NameWithAvatar)
			.related(RelatedKeys {
				name: None,
				secondary: Some("team".into()),
			});
		assert_eq!(render(&column, &row, StatusFallback::Active), " CY  Cy Young  Ops");
	}

	#[test]
	fn custom_renderer_overrides_kind() {
		let row = DataRow::from_pairs([("points", json!(12))]);
		let column = Column::new("points", "Points")
			.kind(RenderKind::Number)
			.renderer(|row| Line::from(format!("{} pts", row.text("points").unwrap_or_default())));
		assert_eq!(render(&column, &row, StatusFallback::Active), "12 pts");
	}
}
