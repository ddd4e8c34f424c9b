//! This crate contains the stories that demonstrate the button with sample content.

use comp_button::Button;
use html::{Event, EventHandler, Node};
use std::cell::RefCell;
use std::rc::Rc;

pub struct Story {
	pub name: &'static str,
	render: fn(&Actions) -> Node,
}

impl Story {
	pub fn render(&self, actions: &Actions) -> Node {
		(self.render)(actions)
	}
}

pub const STORIES: &[Story] = &[
	Story {
		name: "with text",
		render: with_text,
	},
	Story {
		name: "with some emoji",
		render: with_some_emoji,
	},
	Story {
		name: "with a theme provider",
		render: with_a_theme_provider,
	},
];

pub fn find_story(name: &str) -> Option<&'static Story> {
	STORIES.iter().find(|story| story.name == name)
}

fn with_text(actions: &Actions) -> Node {
	Button::new()
		.on_click(actions.action("clicked"))
		.with_children(vec!["Button".into()])
}

fn with_some_emoji(actions: &Actions) -> Node {
	Button::new()
		.on_click(actions.action("clicked"))
		.with_children(vec!["😀 😎 👍 💯".into()])
}

fn with_a_theme_provider(actions: &Actions) -> Node {
	Button::new()
		.on_click(actions.action("clicked"))
		.with_children(vec!["Button".into()])
}

#[derive(Clone, Debug, PartialEq)]
pub struct Action {
	pub name: &'static str,
	pub event: Event,
}

/// Records every event delivered to the handlers it hands out.
#[derive(Clone, Default)]
pub struct Actions {
	records: Rc<RefCell<Vec<Action>>>,
}

impl Actions {
	pub fn new() -> Actions {
		Actions::default()
	}

	pub fn action(&self, name: &'static str) -> EventHandler {
		let records = self.records.clone();
		EventHandler::new(move |event| {
			log::info!("{}: {:?}", name, event);
			records.borrow_mut().push(Action {
				name,
				event: event.clone(),
			});
		})
	}

	pub fn recorded(&self) -> Vec<Action> {
		self.records.borrow().clone()
	}
}
