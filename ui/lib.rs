mod button;

pub use self::button::*;
