//! TUI widget rendering and board geometry

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::{self, CheckStatus, GateReport};
use crate::drag::{Bounds, DragOverlay, DropZone, Point};
use crate::schemas::{ApprovalStatus, ChecklistStatus, HypothesisDetail, StageHealth, StageKey, StageSummary};
use crate::transition::TransitionDialog;
use crate::workspace::{ToastVariant, WorkspaceState};

use super::state::TuiState;

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 3;

/// Lines under a column's top border before the first card
const COLUMN_HEADER_HEIGHT: u16 = 2;

const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub stage: StageKey,
    pub area: Rect,
}

/// Screen area of one visible card
#[derive(Debug, Clone, PartialEq)]
pub struct CardHit {
    pub item_id: String,
    pub stage: StageKey,
    pub area: Rect,
}

/// Where everything sits on screen; used for drawing and for hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub banner: Rect,
    pub board: Rect,
    pub detail: Rect,
    pub footer: Rect,
    pub columns: Vec<ColumnLayout>,
    pub cards: Vec<CardHit>,
}

impl BoardLayout {
    pub fn drop_zones(&self) -> Vec<DropZone> {
        self.columns
            .iter()
            .map(|column| DropZone {
                stage: column.stage,
                bounds: to_bounds(column.area),
            })
            .collect()
    }

    pub fn card_at(&self, point: Point) -> Option<&CardHit> {
        self.cards.iter().find(|card| to_bounds(card.area).contains(point))
    }
}

fn to_bounds(rect: Rect) -> Bounds {
    Bounds::new(
        f64::from(rect.x),
        f64::from(rect.y),
        f64::from(rect.width),
        f64::from(rect.height),
    )
}

/// Split the screen into banner, board columns, detail panel and footer.
///
/// Cards that do not fit in their column are left out of the layout.
pub fn compute_layout(area: Rect, stages: &[StageSummary]) -> BoardLayout {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).split(area);
    let main = Layout::horizontal([Constraint::Percentage(72), Constraint::Percentage(28)]).split(rows[1]);

    let count = stages.len().max(1) as u32;
    let column_rects = Layout::horizontal(stages.iter().map(|_| Constraint::Ratio(1, count))).split(main[0]);

    let mut columns = Vec::with_capacity(stages.len());
    let mut cards = Vec::new();
    for (summary, rect) in stages.iter().zip(column_rects.iter()) {
        columns.push(ColumnLayout {
            stage: summary.key,
            area: *rect,
        });

        let inner_x = rect.x.saturating_add(1);
        let inner_width = rect.width.saturating_sub(2);
        let bottom = rect.y.saturating_add(rect.height.saturating_sub(1));
        let mut y = rect.y.saturating_add(1 + COLUMN_HEADER_HEIGHT);
        for item in &summary.items {
            if y.saturating_add(CARD_HEIGHT) > bottom {
                break;
            }
            cards.push(CardHit {
                item_id: item.id.clone(),
                stage: item.stage,
                area: Rect::new(inner_x, y, inner_width, CARD_HEIGHT),
            });
            y += CARD_HEIGHT;
        }
    }

    BoardLayout {
        banner: rows[0],
        board: main[0],
        detail: main[1],
        footer: rows[2],
        columns,
        cards,
    }
}

/// Draw the whole screen and return the layout it was drawn with.
pub fn render_screen(
    f: &mut Frame,
    workspace: &WorkspaceState,
    ui: &TuiState,
    overlay: Option<&DragOverlay>,
) -> BoardLayout {
    let layout = compute_layout(f.area(), &workspace.stages);

    render_banner(f, layout.banner, workspace);
    render_columns(f, &layout, workspace, overlay);
    render_detail_pane(f, layout.detail, workspace.active_detail.as_ref());
    render_footer(f, layout.footer, ui.dialog_open());

    if let Some(dialog) = &ui.dialog {
        render_dialog(f, dialog, workspace.busy);
    }
    render_toasts(f, &layout, workspace);
    if let Some(overlay) = overlay {
        let title = domain::find_item(&workspace.stages, &overlay.item_id).map(|item| item.title.as_str());
        render_drag_overlay(f, overlay, title);
    }

    layout
}

/// Error banner, or a status line when there is no error
pub fn render_banner(f: &mut Frame, area: Rect, workspace: &WorkspaceState) {
    let line = match &workspace.error {
        Some(error) => Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(Color::White).bg(Color::Red),
        )),
        None => {
            let refreshed = workspace
                .refreshed_at
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "never".to_string());
            let mut spans = vec![
                Span::styled(" hypoboard ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(format!(
                    " {} hypotheses · refreshed {}",
                    workspace.total_items(),
                    refreshed
                )),
            ];
            if workspace.busy {
                spans.push(Span::styled("  Moving…", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Render the six stage columns and their cards
pub fn render_columns(
    f: &mut Frame,
    layout: &BoardLayout,
    workspace: &WorkspaceState,
    overlay: Option<&DragOverlay>,
) {
    let active_id = workspace.active_detail.as_ref().map(|d| d.id.as_str());
    let dragged_id = overlay.map(|o| o.item_id.as_str());

    for (column, summary) in layout.columns.iter().zip(&workspace.stages) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(health_color(summary.stage_health)))
            .title(format!(" {} ", summary.title));
        let inner = block.inner(column.area);
        f.render_widget(block, column.area);

        let header = vec![
            Line::from(format!("{} · SLA {}h", summary.stage_health, summary.sla_hours)),
            Line::from(Span::styled(
                format!("{} items", summary.items.len()),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let header_area = Rect::new(inner.x, inner.y, inner.width, COLUMN_HEADER_HEIGHT.min(inner.height));
        f.render_widget(Paragraph::new(header), header_area);
    }

    for card in &layout.cards {
        let title = workspace
            .stages
            .iter()
            .flat_map(|s| &s.items)
            .find(|item| item.id == card.item_id)
            .map(|item| item.title.as_str())
            .unwrap_or_default();

        let style = if dragged_id == Some(card.item_id.as_str()) {
            Style::default().fg(Color::DarkGray)
        } else if active_id == Some(card.item_id.as_str()) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(card.item_id.as_str());
        f.render_widget(Paragraph::new(title).style(style).block(block), card.area);
    }
}

/// Render the detail panel (right side)
pub fn render_detail_pane(f: &mut Frame, area: Rect, detail: Option<&HypothesisDetail>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("Hypothesis");

    let Some(detail) = detail else {
        let paragraph = Paragraph::new("Select a card to see its details").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} · {}", detail.id, detail.stage)),
        Line::from(format!("Owner: {}", detail.owner)),
    ];
    if !detail.sponsor.is_empty() {
        lines.push(Line::from(format!("Sponsor: {}", detail.sponsor)));
    }
    lines.push(Line::from(""));
    if detail.description.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            "No description",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(detail.description.clone()));
    }

    if !detail.gating_checklist.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Checklist", Style::default().fg(Color::Cyan))));
        for item in &detail.gating_checklist {
            let (glyph, color) = match item.status {
                ChecklistStatus::Complete => ("✓", Color::Green),
                ChecklistStatus::InProgress => ("◐", Color::Yellow),
                ChecklistStatus::Pending => ("○", Color::White),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", glyph), Style::default().fg(color)),
                Span::raw(item.label.clone()),
            ]));
        }
    }

    if !detail.approvals.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Approvals", Style::default().fg(Color::Cyan))));
        for approval in &detail.approvals {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", approval.approver_name)),
                Span::styled(
                    approval.status.to_string(),
                    Style::default().fg(approval_color(approval.status)),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the transition dialog as a centered popup
pub fn render_dialog(f: &mut Frame, dialog: &TransitionDialog, busy: bool) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::from(format!(
        "Move {} from {}",
        dialog.hypothesis_id, dialog.current
    ))];

    let mut targets = vec![Span::raw("Target: ")];
    for option in &dialog.options {
        let label = format!(" {} ", option);
        if dialog.selected == Some(*option) {
            targets.push(Span::styled(label, Style::default().add_modifier(Modifier::REVERSED)));
        } else {
            targets.push(Span::raw(label));
        }
    }
    lines.push(Line::from(targets));
    lines.push(Line::from(""));

    match &dialog.report {
        Some(report) => lines.extend(gate_report_lines(report)),
        None => lines.push(Line::from("No adjacent stage to move to")),
    }

    lines.push(Line::from(""));
    if busy {
        lines.push(Line::from(Span::styled(
            "A stage move is in progress…",
            Style::default().fg(Color::Yellow),
        )));
    } else if dialog.can_submit(busy) {
        lines.push(Line::from("[Enter] move  [←/→] target  [Esc] close"));
    } else {
        lines.push(Line::from("[←/→] target  [Esc] close"));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("Stage transition"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Readiness checks and approval quorum, one line each
pub fn gate_report_lines(report: &GateReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if report.checks.is_empty() {
        lines.push(Line::from(Span::styled(
            "All readiness checks pass",
            Style::default().fg(Color::Green),
        )));
    }
    for check in &report.checks {
        let (glyph, color) = match check.status {
            CheckStatus::Complete => ("✓", Color::Green),
            CheckStatus::Incomplete => ("✗", Color::Red),
            CheckStatus::Warning => ("!", Color::Yellow),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyph), Style::default().fg(color)),
            Span::raw(check.message.clone()),
        ]));
    }

    if !report.approvals.is_empty() {
        let quorum = if report.quorum_satisfied() { "met" } else { "pending" };
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Approvals ({} quorum, {})",
            report.quorum_mode, quorum
        )));
        for approval in &report.approvals {
            let optional = if approval.required { "" } else { " (optional)" };
            lines.push(Line::from(vec![
                Span::raw(format!("  {} · {}{} ", approval.approver, approval.role, optional)),
                Span::styled(
                    approval.status.to_string(),
                    Style::default().fg(approval_color(approval.status)),
                ),
            ]));
        }
    }
    lines
}

/// Stack of toasts in the bottom-right corner, newest at the bottom
pub fn render_toasts(f: &mut Frame, layout: &BoardLayout, workspace: &WorkspaceState) {
    let screen = f.area();
    let toasts: Vec<_> = workspace.toasts.active().collect();
    let visible = toasts.iter().rev().take(MAX_VISIBLE_TOASTS);

    for (offset, toast) in visible.enumerate() {
        let text = format!(" {} ", toast.message);
        let width = (text.chars().count() as u16).min(screen.width);
        let y = layout.footer.y.saturating_sub(1 + offset as u16);
        let x = screen.right().saturating_sub(width + 1);
        let area = Rect::new(x, y, width, 1).intersection(screen);

        let style = match toast.variant {
            ToastVariant::Success => Style::default().fg(Color::Black).bg(Color::Green),
            ToastVariant::Error => Style::default().fg(Color::White).bg(Color::Red),
        };
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(text).style(style), area);
    }
}

/// The dragged card following the pointer
pub fn render_drag_overlay(f: &mut Frame, overlay: &DragOverlay, title: Option<&str>) {
    let screen = f.area();
    let x = overlay.position.x.max(0.0) as u16;
    let y = overlay.position.y.max(0.0) as u16;
    let text = match title {
        Some(title) => format!(" ⇢ {} {} ", overlay.item_id, title),
        None => format!(" ⇢ {} ", overlay.item_id),
    };
    let width = text.chars().count() as u16;
    let area = Rect::new(x, y, width, 1).intersection(screen);
    if area.is_empty() {
        return;
    }
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text).style(Style::default().add_modifier(Modifier::REVERSED)),
        area,
    );
}

/// Render the key help line
pub fn render_footer(f: &mut Frame, area: Rect, dialog_open: bool) {
    let keys = if dialog_open {
        "[←/→] target  [Enter] move  [Esc] close  [x] dismiss  [q] quit"
    } else {
        "[drag] move card  [click] details  [t] transition  [r] refresh  [x] dismiss  [q] quit"
    };
    f.render_widget(
        Paragraph::new(keys)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Left),
        area,
    );
}

// ===== HELPER FUNCTIONS =====

fn health_color(health: StageHealth) -> Color {
    match health {
        StageHealth::OnTrack => Color::Green,
        StageHealth::Warning => Color::Yellow,
        StageHealth::Risk => Color::Red,
    }
}

fn approval_color(status: ApprovalStatus) -> Color {
    match status {
        ApprovalStatus::Approved => Color::Green,
        ApprovalStatus::Rejected => Color::Red,
        ApprovalStatus::Pending => Color::Yellow,
    }
}

/// Rectangle covering a percentage of `area`, centered in it
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
