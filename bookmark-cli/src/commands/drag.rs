use crate::cli::OutputFormat;
use crate::output::{self, text};
use crate::session::Session;
use anyhow::{anyhow, Result};
use bookmark_board::drag::{DragCoordinator, DragItem, GestureEvent};
use serde_json::json;

/// Replay a whole gesture: pick up `active`, hover `over`, let go
pub fn run(session: &mut Session, active: &str, over: &str, format: OutputFormat) -> Result<()> {
    let active = DragItem::resolve(session.ctx.state(), active)
        .ok_or_else(|| anyhow!("no column or row with id {active}"))?;
    let over = DragItem::resolve(session.ctx.state(), over)
        .ok_or_else(|| anyhow!("no column or row with id {over}"))?;

    let mut coordinator = DragCoordinator::with_processor(session.processor().clone());
    let mut changed = false;
    for event in [
        GestureEvent::start(active.clone()),
        GestureEvent::over(active.clone(), over.clone()),
        GestureEvent::end(),
    ] {
        changed |= coordinator.handle(&event, &mut session.ctx)?;
    }

    let value = if changed {
        json!({ "moved": active.id, "over": over.id })
    } else {
        json!({ "changed": false })
    };
    output::print_message(format, &value, |v| {
        format!("Moved {} over {}", text(&v["moved"]), text(&v["over"]))
    })
}
