use comfy_table::{Cell, Color, ContentArrangement, Row, Table, presets::UTF8_FULL};
use console::style;
use swipe_pager::PagerFrame;

use crate::replay::{Notification, StepReport};

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message.as_ref());
}

pub fn note(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("note").blue().bold(), message.as_ref());
}

fn step(message: impl AsRef<str>) {
    eprintln!("    {}", message.as_ref());
}

fn describe(notification: &Notification) -> String {
    match notification {
        Notification::DraggingBegan => "dragging began".to_string(),
        Notification::DraggingChanged { progress } => format!("dragging changed {progress:.3}"),
        Notification::DraggingEnded => "dragging ended".to_string(),
        Notification::PageWillChange { page } => format!("page will change to {page}"),
        Notification::PageWillTransition { result } => match result {
            Ok(transition) => format!(
                "page will transition {} -> {} (+{})",
                transition.current_page, transition.next_page, transition.page_increment
            ),
            Err(err) => format!("page will not transition: {err}"),
        },
        Notification::PageChanged { page } => format!("page changed to {page}"),
    }
}

/// Prints one replayed step to stderr, followed by its frame if one was taken.
pub fn print_step(report: &StepReport) {
    status(
        "Step",
        format!(
            "{:<28} page {} (showing {}) {}",
            report.step,
            report.page,
            report.current_page,
            style(&report.phase).dim()
        ),
    );
    if report.accepted == Some(false) {
        warn(format!("`{}` was ignored", report.step));
    }
    if let Some(commit) = &report.commit {
        step(format!(
            "commit {} -> {} by {} ({:?} at {:.2}x)",
            commit.page, commit.new_page, commit.increment, commit.animation, commit.speed
        ));
    }
    for notification in &report.notifications {
        step(describe(notification));
    }
    if let Some(frame) = &report.frame {
        print_frame(frame);
    }
}

pub fn print_frame(frame: &PagerFrame) {
    if frame.slots.is_empty() {
        note("frame has no pages");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Row::from(vec![
            Cell::new("Index").fg(Color::Cyan),
            Cell::new("Key").fg(Color::Cyan),
            Cell::new("Position").fg(Color::Cyan),
            Cell::new("Scale").fg(Color::Cyan),
            Cell::new("Opacity").fg(Color::Cyan),
            Cell::new("Rotation").fg(Color::Cyan),
        ]));

    for slot in &frame.slots {
        let mut index = Cell::new(slot.index.to_string());
        if slot.is_focused {
            index = index.fg(Color::Green);
        } else if slot.is_edge {
            index = index.fg(Color::DarkGrey);
        }
        table.add_row(Row::from(vec![
            index,
            Cell::new(format!("{}#{}", slot.key.source_index, slot.key.repetition)),
            Cell::new(format!("{:.1}", slot.position)),
            Cell::new(format!("{:.3}", slot.scale)),
            Cell::new(format!("{:.3}", slot.opacity)),
            Cell::new(format!("{:.1}°", slot.rotation_degrees)),
        ]));
    }

    println!(
        "page {} | size {}x{} | spacing {:.1} | offset {:.1}",
        frame.page, frame.page_size.x, frame.page_size.y, frame.item_spacing, frame.container_offset
    );
    println!("{table}");
}
