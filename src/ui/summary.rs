//! Overview table of every resource store.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};

use crate::resource::{OperationKind, OperationStatus, ResourceKind};
use crate::store::AppState;

use super::theme;
use super::variant::{TableVariant, Variant};

const COLUMNS: [&str; 5] = ["Resource", "Items", "Load", "Selected", "Error"];

/// Colour of a status badge.
pub fn status_style(status: OperationStatus) -> Style {
    match status {
        OperationStatus::Idle => Style::default().fg(theme::TEXT_MUTED),
        OperationStatus::Loading => Style::default().fg(theme::STATUS_WARN),
        OperationStatus::Succeeded => Style::default().fg(theme::STATUS_OK),
        OperationStatus::Failed => Style::default().fg(theme::STATUS_ERROR),
    }
}

/// One row per resource kind.
pub fn summary_table(state: &AppState, variant: TableVariant) -> Table<'static> {
    let rows = ResourceKind::ALL.iter().enumerate().map(|(index, kind)| {
        let resource = state.resource(*kind);
        let load = resource.status(OperationKind::Load);
        let selected = resource
            .selected()
            .map(|entity| entity.id().to_string())
            .unwrap_or_else(|| "-".to_string());
        let error = resource
            .error()
            .map(|error| error.to_string())
            .unwrap_or_default();
        Row::new(vec![
            Cell::from(kind.as_str()),
            Cell::from(resource.len().to_string()),
            Cell::from(load.as_str()).style(status_style(load)),
            Cell::from(selected),
            Cell::from(error).style(Style::default().fg(theme::STATUS_ERROR)),
        ])
        .style(variant.row_style(index))
    });

    let widths = [
        Constraint::Length(18),
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(10),
    ];

    Table::new(rows, widths)
        .header(Row::new(COLUMNS).style(variant.style()))
        .column_spacing(variant.column_spacing())
        .block(
            Block::default()
                .title("Stores")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER)),
        )
}

/// Render the summary into plain text, one line per terminal row.
pub fn render_summary(state: &AppState, variant: TableVariant, width: u16) -> String {
    // Borders (2) + header (1) + one row per resource.
    let height = 3 + ResourceKind::ALL.len() as u16;
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    summary_table(state, variant).render(area, &mut buffer);

    let mut lines = Vec::with_capacity(height as usize);
    for y in 0..area.height {
        let line: String = (0..area.width)
            .map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" "))
            .collect();
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
