use std::borrow::Cow;
use std::rc::Rc;

/// The name of an event a listener is registered for, such as `"click"`.
pub type EventType = &'static str;

/// A native event delivered by the host to an element.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
	pub event_type: Cow<'static, str>,
	/// The click count for pointer activations, zero otherwise.
	pub detail: i32,
}

impl Event {
	pub fn new(event_type: impl Into<Cow<'static, str>>) -> Event {
		Event {
			event_type: event_type.into(),
			detail: 0,
		}
	}

	/// A single primary activation of a control.
	pub fn click() -> Event {
		Event {
			event_type: "click".into(),
			detail: 1,
		}
	}

	pub(crate) fn from_dom(event: &web_sys::Event) -> Event {
		use wasm_bindgen::JsCast;
		let detail = event
			.dyn_ref::<web_sys::UiEvent>()
			.map(|event| event.detail())
			.unwrap_or(0);
		Event {
			event_type: event.type_().into(),
			detail,
		}
	}
}

/// A callback attached to an element. Handlers compare equal only to clones of themselves.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
	pub fn new<F>(f: F) -> EventHandler
	where
		F: Fn(&Event) + 'static,
	{
		EventHandler(Rc::new(f))
	}

	pub fn call(&self, event: &Event) {
		(self.0)(event)
	}
}

impl<F> From<F> for EventHandler
where
	F: Fn(&Event) + 'static,
{
	fn from(f: F) -> EventHandler {
		EventHandler::new(f)
	}
}

impl PartialEq for EventHandler {
	fn eq(&self, other: &EventHandler) -> bool {
		Rc::as_ptr(&self.0) as *const () == Rc::as_ptr(&other.0) as *const ()
	}
}

impl std::fmt::Debug for EventHandler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "EventHandler({:p})", Rc::as_ptr(&self.0))
	}
}
