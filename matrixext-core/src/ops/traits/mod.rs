pub mod numeric;

pub use numeric::Element;
