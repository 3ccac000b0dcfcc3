//! Style variant tables for the presentational components.
//!
//! Every component has a closed set of variants with one default. Code
//! names variants through the enums; keys coming from configuration go
//! through [`Variant::resolve`], which never fails.

use ratatui::style::{Modifier, Style};

use super::theme;

pub trait Variant: Copy + Default + PartialEq + 'static {
    /// Every variant, in table order.
    const ALL: &'static [Self];

    /// Stable lookup key.
    fn key(self) -> &'static str;

    fn style(self) -> Style;

    /// Strict lookup.
    fn lookup(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.key().eq_ignore_ascii_case(key))
    }

    /// Lookup that falls back to the default for unknown keys.
    fn resolve(key: &str) -> Self {
        Self::lookup(key).unwrap_or_else(|| {
            let fallback = Self::default();
            tracing::debug!(key, fallback = fallback.key(), "Unknown variant key, using default");
            fallback
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Ghost,
}

impl Variant for ButtonVariant {
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Ghost,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
        }
    }

    fn style(self) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        match self {
            Self::Primary => base.fg(theme::TEXT).bg(theme::BRAND_PRIMARY),
            Self::Secondary => base.fg(theme::TEXT).bg(theme::BRAND_SECONDARY),
            Self::Success => base.fg(theme::SURFACE).bg(theme::STATUS_OK),
            Self::Danger => base.fg(theme::TEXT).bg(theme::STATUS_ERROR),
            Self::Ghost => Style::default().fg(theme::BRAND_PRIMARY),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Plain,
    Outlined,
    Elevated,
    Warning,
}

impl Variant for CardVariant {
    const ALL: &'static [Self] = &[Self::Plain, Self::Outlined, Self::Elevated, Self::Warning];

    fn key(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
            Self::Warning => "warning",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Plain => Style::default().fg(theme::TEXT).bg(theme::SURFACE),
            Self::Outlined => Style::default().fg(theme::BORDER),
            Self::Elevated => Style::default().fg(theme::TEXT).bg(theme::SURFACE_RAISED),
            Self::Warning => Style::default().fg(theme::STATUS_WARN),
        }
    }
}

/// Modal variants style the border of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVariant {
    #[default]
    Info,
    Confirm,
    Danger,
}

impl Variant for ModalVariant {
    const ALL: &'static [Self] = &[Self::Info, Self::Confirm, Self::Danger];

    fn key(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Confirm => "confirm",
            Self::Danger => "danger",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Info => Style::default().fg(theme::TEXT),
            Self::Confirm => Style::default().fg(theme::BRAND_PRIMARY),
            Self::Danger => Style::default()
                .fg(theme::STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Tabs variants style the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabsVariant {
    #[default]
    Underline,
    Pills,
}

impl Variant for TabsVariant {
    const ALL: &'static [Self] = &[Self::Underline, Self::Pills];

    fn key(self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::Pills => "pills",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Underline => Style::default()
                .fg(theme::BRAND_PRIMARY)
                .add_modifier(Modifier::UNDERLINED),
            Self::Pills => Style::default().fg(theme::TEXT).bg(theme::BRAND_PRIMARY),
        }
    }
}

/// Table variants style the header row; `Striped` also shades odd rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableVariant {
    #[default]
    Plain,
    Striped,
    Compact,
}

impl Variant for TableVariant {
    const ALL: &'static [Self] = &[Self::Plain, Self::Striped, Self::Compact];

    fn key(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Striped => "striped",
            Self::Compact => "compact",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Plain | Self::Striped => Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
            Self::Compact => Style::default().fg(theme::TEXT_MUTED),
        }
    }
}

impl TableVariant {
    pub fn row_style(self, index: usize) -> Style {
        match self {
            Self::Striped if index % 2 == 1 => Style::default().bg(theme::SURFACE_RAISED),
            _ => Style::default(),
        }
    }

    pub fn column_spacing(self) -> u16 {
        match self {
            Self::Compact => 1,
            Self::Plain | Self::Striped => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_are_unique<V: Variant>() {
        let mut keys: Vec<_> = V::ALL.iter().map(|v| v.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), V::ALL.len());
    }

    #[test]
    fn every_table_has_unique_keys_and_contains_default() {
        keys_are_unique::<ButtonVariant>();
        keys_are_unique::<CardVariant>();
        keys_are_unique::<ModalVariant>();
        keys_are_unique::<TabsVariant>();
        keys_are_unique::<TableVariant>();
        assert!(ButtonVariant::ALL.contains(&ButtonVariant::default()));
        assert!(TableVariant::ALL.contains(&TableVariant::default()));
    }

    #[test]
    fn striped_shades_odd_rows_only() {
        assert_eq!(TableVariant::Striped.row_style(0), Style::default());
        assert_ne!(TableVariant::Striped.row_style(1), Style::default());
        assert_eq!(TableVariant::Plain.row_style(1), Style::default());
    }
}
