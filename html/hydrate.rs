use crate::{Event, HostNode, Node};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Error)]
pub enum HydrateError {
	#[error("no element with id {0}")]
	MissingContainer(String),
	#[error("expected a <{0}> element but the document has none")]
	MissingElement(&'static str),
	#[error("expected a <{expected}> element but found <{found}>")]
	TagMismatch {
		expected: &'static str,
		found: String,
	},
	#[error("failed to attach a {0} listener")]
	Listener(&'static str),
}

/// Render `node` into `container` and attach its listeners.
pub fn mount(node: Node, container: &web_sys::Element) -> Result<(), HydrateError> {
	let node = node.into_rendered();
	container.set_inner_html(&node.to_string());
	hydrate(&node, container)
}

pub fn mount_by_id(id: &str, node: Node) -> Result<(), HydrateError> {
	let container = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.get_element_by_id(id))
		.ok_or_else(|| HydrateError::MissingContainer(id.to_owned()))?;
	mount(node, &container)
}

/// Attach the listeners of a rendered `node` to the server rendered elements already inside `container`.
pub fn hydrate(node: &Node, container: &web_sys::Element) -> Result<(), HydrateError> {
	hydrate_hosts(&node.hosts(), container)
}

fn hydrate_hosts(hosts: &[&HostNode], parent: &web_sys::Element) -> Result<(), HydrateError> {
	let elements = parent.children();
	for (index, host) in hosts.iter().enumerate() {
		let element = elements
			.item(index as u32)
			.ok_or(HydrateError::MissingElement(host.name))?;
		hydrate_host(host, &element)?;
	}
	Ok(())
}

fn hydrate_host(host: &HostNode, element: &web_sys::Element) -> Result<(), HydrateError> {
	let tag_name = element.tag_name();
	if !tag_name.eq_ignore_ascii_case(host.name) {
		return Err(HydrateError::TagMismatch {
			expected: host.name,
			found: tag_name.to_lowercase(),
		});
	}
	for (event_type, handler) in host.listeners.iter() {
		let handler = handler.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
			handler.call(&Event::from_dom(&event));
		}));
		element
			.add_event_listener_with_callback(event_type, callback_fn.as_ref().unchecked_ref())
			.map_err(|_| HydrateError::Listener(*event_type))?;
		callback_fn.forget();
		log::debug!("attached {} listener to <{}>", event_type, host.name);
	}
	hydrate_hosts(&host.host_children(), element)
}
