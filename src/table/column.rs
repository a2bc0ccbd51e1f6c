use std::fmt;
use std::sync::Arc;

use ratatui::layout::{Alignment, Constraint};
use ratatui::text::Line;
use serde::Deserialize;

use super::row::DataRow;

/// Custom cell renderer overriding the built-in dispatch for a column.
pub type CellRenderer = Arc<dyn Fn(&DataRow) -> Line<'static> + Send + Sync>;

/// How the values of a column are turned into cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
	#[default]
	Text,
	Bold,
	Number,
	Avatar,
	NameWithAvatar,
	Chips,
	Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
	#[default]
	Left,
	Center,
	Right,
}

impl From<Align> for Alignment {
	fn from(value: Align) -> Self {
		match value {
			Align::Left => Alignment::Left,
			Align::Center => Alignment::Center,
			Align::Right => Alignment::Right,
		}
	}
}

/// Other fields of the row a column reads from. Avatar images cannot be drawn
/// in a terminal, so avatars always use the initials of `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelatedKeys {
	pub name: Option<String>,
	pub secondary: Option<String>,
}

/// Column descriptor.
#[derive(Clone, Deserialize)]
pub struct Column {
	pub key: String,
	pub label: String,
	#[serde(default)]
	pub kind: RenderKind,
	#[serde(default)]
	pub width: Option<u16>,
	#[serde(default)]
	pub align: Align,
	#[serde(default)]
	pub related: RelatedKeys,
	#[serde(skip)]
	pub renderer: Option<CellRenderer>,
}

impl Column {
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			kind: RenderKind::Text,
			width: None,
			align: Align::Left,
			related: RelatedKeys::default(),
			renderer: None,
		}
	}

	#[must_use]
	pub fn kind(mut self, kind: RenderKind) -> Self {
		self.kind = kind;
		self
	}

	#[must_use]
	pub fn width(mut self, width: u16) -> Self {
		self.width = Some(width);
		self
	}

	#[must_use]
	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	#[must_use]
	pub fn related(mut self, related: RelatedKeys) -> Self {
		self.related = related;
		self
	}

	#[must_use]
	pub fn renderer<F>(mut self, renderer: F) -> Self
	where
		F: Fn(&DataRow) -> Line<'static> + Send + Sync + 'static,
	{
		self.renderer = Some(Arc::new(renderer));
		self
	}

	pub(crate) fn constraint(&self) -> Constraint {
		match self.width {
			Some(width) => Constraint::Length(width),
			None => Constraint::Fill(1),
		}
	}
}

impl fmt::Debug for Column {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("label", &self.label)
			.field("kind", &self.kind)
			.field("width", &self.width)
			.field("align", &self.align)
			.field("related", &self.related)
			.field("custom_renderer", &self.renderer.is_some())
			.finish()
	}
}
