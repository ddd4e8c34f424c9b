use html::{component, element, Component, EventHandler, HydrateError, Node};
use std::borrow::Cow;

/// The class every rendered button carries. Stylesheets target it, so it must not change.
pub const BUTTON_CLASS: &str = "button";

/// The native `type` of the rendered control.
///
/// Values other than the three common ones are passed through to the document unchecked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonType {
	Button,
	Submit,
	Reset,
	Other(Cow<'static, str>),
}

impl ButtonType {
	pub fn as_str(&self) -> &str {
		match self {
			ButtonType::Button => "button",
			ButtonType::Submit => "submit",
			ButtonType::Reset => "reset",
			ButtonType::Other(value) => value.as_ref(),
		}
	}
}

impl Default for ButtonType {
	fn default() -> ButtonType {
		ButtonType::Button
	}
}

impl From<&'static str> for ButtonType {
	fn from(value: &'static str) -> ButtonType {
		match value {
			"button" => ButtonType::Button,
			"submit" => ButtonType::Submit,
			"reset" => ButtonType::Reset,
			value => ButtonType::Other(value.into()),
		}
	}
}

impl From<String> for ButtonType {
	fn from(value: String) -> ButtonType {
		match value.as_str() {
			"button" => ButtonType::Button,
			"submit" => ButtonType::Submit,
			"reset" => ButtonType::Reset,
			_ => ButtonType::Other(value.into()),
		}
	}
}

#[derive(Clone, Default)]
pub struct Button {
	pub button_type: Option<ButtonType>,
	pub on_click: Option<EventHandler>,
}

impl Button {
	pub fn new() -> Button {
		Button::default()
	}

	pub fn button_type(mut self, button_type: impl Into<ButtonType>) -> Button {
		self.button_type = Some(button_type.into());
		self
	}

	pub fn on_click(mut self, on_click: impl Into<EventHandler>) -> Button {
		self.on_click = Some(on_click.into());
		self
	}

	/// Wrap this button and its content in a node for a larger tree.
	pub fn with_children(self, children: Vec<Node>) -> Node {
		component(self, children)
	}
}

impl Component for Button {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node {
		let Button {
			button_type,
			on_click,
		} = *self;
		let button_type = button_type.unwrap_or_default();
		element("div")
			.child(
				element("button")
					.attribute("class", BUTTON_CLASS)
					.attribute("type", button_type.as_str().to_owned())
					.listener("click", on_click)
					.children(children),
			)
			.into()
	}
}

/// Render `button` into the element with id `id` and wire its click handler to the document.
pub fn boot_button(id: &str, button: Button, children: Vec<Node>) -> Result<(), HydrateError> {
	html::mount_by_id(id, button.with_children(children))
}

#[cfg(test)]
mod test {
	use super::*;
	use html::{Event, HostNode};
	use std::cell::RefCell;
	use std::rc::Rc;

	fn render(button: Button, children: Vec<Node>) -> Node {
		button.with_children(children).into_rendered()
	}

	fn control(node: &Node) -> &HostNode {
		node.find(|host| host.name == "button").unwrap()
	}

	#[test]
	fn test_default_type() {
		let node = render(Button::new(), vec!["Button".into()]);
		assert_eq!(control(&node).get_attribute("type"), Some("button"));
		insta::assert_snapshot!(node.to_string(), @r###"<div><button class="button" type="button">Button</button></div>"###);
	}

	#[test]
	fn test_type_passthrough() {
		for value in &["button", "submit", "reset", "menu"] {
			let node = render(Button::new().button_type(*value), Vec::new());
			assert_eq!(control(&node).get_attribute("type"), Some(*value));
		}
		let node = render(Button::new().button_type("submit".to_owned()), Vec::new());
		assert_eq!(control(&node).get_attribute("type"), Some("submit"));
		let node = render(
			Button {
				button_type: Some(ButtonType::Reset),
				on_click: None,
			},
			Vec::new(),
		);
		assert_eq!(control(&node).get_attribute("type"), Some("reset"));
	}

	#[test]
	fn test_emoji_content() {
		let node = render(Button::new(), vec!["😀 😎 👍 💯".into()]);
		insta::assert_snapshot!(node.to_string(), @r###"<div><button class="button" type="button">😀 😎 👍 💯</button></div>"###);
	}

	#[test]
	fn test_nested_and_empty_content() {
		let node = render(
			Button::new().button_type("submit"),
			vec![element("strong").child("Save").into(), " now".into()],
		);
		assert_eq!(
			node.to_string(),
			r#"<div><button class="button" type="submit"><strong>Save</strong> now</button></div>"#
		);
		let node = render(Button::new(), Vec::new());
		assert_eq!(
			node.to_string(),
			r#"<div><button class="button" type="button"></button></div>"#
		);
	}

	#[test]
	fn test_class_is_constant() {
		let buttons = vec![
			Button::new(),
			Button::new().button_type("submit"),
			Button::new().button_type("reset").on_click(|_: &Event| {}),
			Button::new().on_click(|_: &Event| {}),
		];
		for button in buttons {
			let node = render(button, vec!["x".into()]);
			assert_eq!(control(&node).get_attribute("class"), Some(BUTTON_CLASS));
		}
	}

	#[test]
	fn test_click_wiring() {
		let received = Rc::new(RefCell::new(Vec::new()));
		let on_click = {
			let received = received.clone();
			EventHandler::new(move |event| received.borrow_mut().push(event.clone()))
		};
		let node = render(Button::new().on_click(on_click), vec!["Button".into()]);
		assert!(received.borrow().is_empty());
		let event = Event {
			event_type: "click".into(),
			detail: 2,
		};
		assert_eq!(control(&node).dispatch(&event), 1);
		assert_eq!(*received.borrow(), vec![event]);
		let wrapper = node.hosts()[0];
		assert_eq!(wrapper.dispatch(&Event::click()), 0);
		assert_eq!(received.borrow().len(), 1);
	}

	#[test]
	fn test_without_handler() {
		let node = render(Button::new(), vec!["Button".into()]);
		assert!(control(&node).listeners.is_empty());
		assert_eq!(control(&node).dispatch(&Event::click()), 0);
	}

	#[test]
	fn test_idempotent() {
		let on_click = EventHandler::new(|_| {});
		let button = Button::new().button_type("submit").on_click(on_click);
		let a = render(button.clone(), vec!["Button".into()]);
		let b = render(button, vec!["Button".into()]);
		assert_eq!(a, b);
	}

	#[test]
	fn test_shape() {
		let inputs: Vec<(Button, Vec<Node>)> = vec![
			(Button::new(), Vec::new()),
			(Button::new(), vec!["a".into(), "b".into()]),
			(
				Button::new().button_type("reset"),
				vec![element("span").into(), element("span").into()],
			),
		];
		for (button, children) in inputs {
			let node = render(button, children);
			let hosts = node.hosts();
			assert_eq!(hosts.len(), 1);
			let wrapper = hosts[0];
			assert_eq!(wrapper.name, "div");
			assert!(wrapper.attributes.is_empty());
			assert!(wrapper.listeners.is_empty());
			let controls = wrapper.host_children();
			assert_eq!(controls.len(), 1);
			assert_eq!(controls[0].name, "button");
		}
	}
}
