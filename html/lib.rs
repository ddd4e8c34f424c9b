use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

mod event;
mod hydrate;

pub use self::event::{Event, EventHandler, EventType};
pub use self::hydrate::{hydrate, mount, mount_by_id, HydrateError};

#[derive(Clone, Debug, From, PartialEq)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	#[from(ignore)]
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug, PartialEq)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

/// An element of the host document, such as `<div>` or `<button>`.
#[derive(Clone, Debug, PartialEq)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub listeners: Vec<(EventType, EventHandler)>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, Debug, From, PartialEq)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

#[derive(Clone)]
pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

pub trait Component: ComponentClone {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

pub trait ComponentClone {
	fn clone_box(&self) -> Box<dyn Component>;
}

impl<T> ComponentClone for T
where
	T: Component + Clone + 'static,
{
	fn clone_box(&self) -> Box<dyn Component> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn Component> {
	fn clone(&self) -> Box<dyn Component> {
		self.clone_box()
	}
}

/// Start building a host element with the given tag name.
pub fn element(name: &'static str) -> HostNode {
	HostNode {
		name,
		attributes: Vec::new(),
		children: Vec::new(),
		listeners: Vec::new(),
		self_closing: false,
	}
}

/// Create a node that renders `component` with `children` when the tree is rendered.
pub fn component<C>(component: C, children: Vec<Node>) -> Node
where
	C: Component + 'static,
{
	Node::Component(ComponentNode::Unrendered {
		component: Some(Box::new(component)),
		children: Some(children),
	})
}

impl HostNode {
	pub fn attribute(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> HostNode {
		self.attributes.push((key, value.into()));
		self
	}

	pub fn child(mut self, child: impl Into<Node>) -> HostNode {
		self.children.push(child.into());
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> HostNode {
		self.children.extend(children);
		self
	}

	/// Register `handler` for events of `event_type`. Passing `None` registers nothing.
	pub fn listener(
		mut self,
		event_type: EventType,
		handler: impl Into<Option<EventHandler>>,
	) -> HostNode {
		if let Some(handler) = handler.into() {
			self.listeners.push((event_type, handler));
		}
		self
	}

	pub fn self_closing(mut self) -> HostNode {
		self.self_closing = true;
		self
	}

	/// Return the string value of the attribute `key`, if it is set.
	pub fn get_attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| *k == key)
			.and_then(|(_, value)| match value {
				AttributeValue::String(value) => value.as_deref(),
				AttributeValue::Bool(Some(true)) => Some(""),
				AttributeValue::Bool(_) => None,
			})
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.get_attribute("class")
			.map(|value| value.split_whitespace().any(|c| c == class))
			.unwrap_or(false)
	}

	/// The host elements directly beneath this one, looking through fragments, vecs, options and rendered components.
	pub fn host_children(&self) -> Vec<&HostNode> {
		let mut hosts = Vec::new();
		for child in self.children.iter() {
			child.collect_hosts(&mut hosts);
		}
		hosts
	}

	/// Deliver `event` to this element's listeners for `event.event_type`, returning how many were invoked.
	pub fn dispatch(&self, event: &Event) -> usize {
		let mut invoked = 0;
		for (event_type, handler) in self.listeners.iter() {
			if *event_type == event.event_type {
				handler.call(event);
				invoked += 1;
			}
		}
		log::trace!(
			"dispatched {} to <{}>, {} listener(s)",
			event.event_type,
			self.name,
			invoked
		);
		invoked
	}
}

impl Node {
	pub fn render_to_string(self) -> String {
		self.into_rendered().to_string()
	}

	/// Render every component in the tree.
	pub fn into_rendered(mut self) -> Node {
		self.render();
		self
	}

	fn render(&mut self) -> &mut Node {
		match self {
			Node::Fragment(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Host(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => {
				if let ComponentNode::Unrendered {
					component,
					children,
				} = node
				{
					let component = component.take();
					let children = children.take().unwrap_or_default();
					let mut rendered = match component {
						Some(component) => component.render(children),
						None => Node::Vec(Vec::new()),
					};
					rendered.render();
					*node = ComponentNode::Rendered(Box::new(rendered));
				}
			}
			Node::Vec(node) => {
				for child in node.iter_mut() {
					child.render();
				}
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.render();
				}
			}
			_ => {}
		};
		self
	}

	/// The outermost host elements of this node.
	pub fn hosts(&self) -> Vec<&HostNode> {
		let mut hosts = Vec::new();
		self.collect_hosts(&mut hosts);
		hosts
	}

	fn collect_hosts<'a>(&'a self, hosts: &mut Vec<&'a HostNode>) {
		match self {
			Node::Host(node) => hosts.push(node),
			Node::Fragment(node) => {
				for child in node.children.iter() {
					child.collect_hosts(hosts);
				}
			}
			Node::Component(ComponentNode::Rendered(node)) => node.collect_hosts(hosts),
			Node::Option(Some(node)) => node.collect_hosts(hosts),
			Node::Vec(node) => {
				for child in node.iter() {
					child.collect_hosts(hosts);
				}
			}
			_ => {}
		}
	}

	/// Depth first search for the first host element matching `predicate`. Unrendered components are not searched.
	pub fn find<F>(&self, predicate: F) -> Option<&HostNode>
	where
		F: Fn(&HostNode) -> bool,
	{
		self.find_with(&predicate)
	}

	fn find_with<F>(&self, predicate: &F) -> Option<&HostNode>
	where
		F: Fn(&HostNode) -> bool,
	{
		self.hosts().into_iter().find_map(|host| {
			if predicate(host) {
				Some(host)
			} else {
				host.children
					.iter()
					.find_map(|child| child.find_with(predicate))
			}
		})
	}
}

impl std::fmt::Debug for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Unrendered { .. } => f.write_str("Unrendered"),
			ComponentNode::Rendered(node) => f.debug_tuple("Rendered").field(node).finish(),
		}
	}
}

// Unrendered components have no structure to compare and are never equal.
impl PartialEq for ComponentNode {
	fn eq(&self, other: &ComponentNode) -> bool {
		match (self, other) {
			(ComponentNode::Rendered(a), ComponentNode::Rendered(b)) => a == b,
			_ => false,
		}
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => {
				write!(f, "{}", node)?;
			}
			Node::EscapedText(node) => {
				write!(f, "{}", node)?;
			}
			Node::Fragment(node) => {
				write!(f, "{}", node)?;
			}
			Node::Host(node) => {
				write!(f, "{}", node)?;
			}
			Node::Component(node) => {
				write!(f, "{}", node)?;
			}
			Node::Option(node) => {
				if let Some(node) = node {
					write!(f, "{}", node)?;
				}
			}
			Node::Vec(node) => {
				for node in node {
					write!(f, "{}", node)?;
				}
			}
		};
		Ok(())
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						f.write_char('"')?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " /")?;
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let rendered = match self {
			ComponentNode::Rendered(r) => r,
			_ => panic!("attempted to display component that has not yet been rendered"),
		};
		write!(f, "{}", rendered)?;
		Ok(())
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::EscapedTextNode($t.into())
	};
}

#[cfg(test)]
mod test {
	use super::*;
	use std::cell::Cell;
	use std::rc::Rc;

	#[derive(Clone)]
	struct Card;

	impl Component for Card {
		fn render(self: Box<Self>, children: Vec<Node>) -> Node {
			element("section")
				.attribute("class", "card")
				.children(children)
				.into()
		}
	}

	#[test]
	fn test_render_host() {
		let node: Node = element("p")
			.attribute("class", "p")
			.attribute("hidden", false)
			.attribute("title", None::<String>)
			.child("a < b")
			.into();
		insta::assert_snapshot!(node.render_to_string(), @r###"<p class="p">a &lt; b</p>"###);
	}

	#[test]
	fn test_render_self_closing() {
		let node: Node = element("input")
			.attribute("disabled", true)
			.attribute("value", "\"quoted\"")
			.self_closing()
			.into();
		insta::assert_snapshot!(node.render_to_string(), @r###"<input disabled value="&quot;quoted&quot;" />"###);
	}

	#[test]
	fn test_render_component() {
		let node = element("main")
			.child(component(Card, vec!["one".into(), None::<String>.into()]))
			.child(Node::Vec(vec!["two".into()]));
		let html = Node::from(node).render_to_string();
		assert_eq!(html, r#"<main><section class="card">one</section>two</main>"#);
	}

	#[test]
	fn test_raw_text_is_not_escaped() {
		let node = Node::Fragment(FragmentNode {
			children: vec![RawTextNode("<b>".into()).into(), "<b>".into()],
		});
		assert_eq!(node.render_to_string(), "<b>&lt;b&gt;");
	}

	#[test]
	fn test_hosts_flattens_transparent_nodes() {
		let node = Node::Vec(vec![
			Node::Option(None),
			component(Card, Vec::new()),
			Node::Fragment(FragmentNode {
				children: vec![element("hr").self_closing().into()],
			}),
		])
		.into_rendered();
		let names = node.hosts().iter().map(|host| host.name).collect::<Vec<_>>();
		assert_eq!(names, vec!["section", "hr"]);
	}

	#[test]
	fn test_find_and_dispatch() {
		let count = Rc::new(Cell::new(0));
		let handler = {
			let count = count.clone();
			EventHandler::new(move |_| count.set(count.get() + 1))
		};
		let node: Node = element("div")
			.child(
				element("span").child(
					element("a")
						.attribute("class", "link primary")
						.listener("click", handler)
						.listener("focus", None::<EventHandler>),
				),
			)
			.into();
		let link = node.find(|host| host.has_class("primary")).unwrap();
		assert_eq!(link.name, "a");
		assert_eq!(link.dispatch(&Event::new("focus")), 0);
		assert_eq!(count.get(), 0);
		assert_eq!(link.dispatch(&Event::click()), 1);
		assert_eq!(count.get(), 1);
		assert!(node.find(|host| host.name == "button").is_none());
	}

	#[test]
	fn test_structural_equality() {
		let handler = EventHandler::new(|_| {});
		let build = |handler: &EventHandler| -> Node {
			element("div")
				.child(element("button").listener("click", handler.clone()))
				.into()
		};
		assert_eq!(build(&handler), build(&handler));
		assert_ne!(build(&handler), build(&EventHandler::new(|_| {})));
		assert_ne!(component(Card, Vec::new()), component(Card, Vec::new()));
		assert_eq!(
			component(Card, Vec::new()).into_rendered(),
			component(Card, Vec::new()).into_rendered()
		);
	}
}
