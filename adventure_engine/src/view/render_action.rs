//! module Render Action
//!
//! Renderers for direct responses to commands: successes, failures, errors and
//! "did you mean" hints.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::{ICON_ERROR, ICON_FAILURE, ICON_HINT, ICON_SUCCESS},
};

pub(super) fn action_success(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn action_failure(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg.denied_style()).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn errors(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match &i.view_item {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{:<4}{}", ICON_ERROR.bright_red(), msg.error_style()).as_str(),
                normal_block()
            )
        );
    }
}

/// The nearest known verb for a mistyped one.
pub(super) fn suggestions(view: &View) {
    for entry in &view.items {
        if let ViewItem::Suggestion(verb) = &entry.view_item {
            println!("{:<4}Did you mean: {}?", ICON_HINT.yellow(), verb.highlight());
        }
    }
}
