mod model;
mod route;

use proc_macro::TokenStream;

/// Creates a new documentation function for the route, named after the annotated function with the suffix `_docs`.
///
/// The first line of the doc comment becomes the summary, the rest the description.
#[proc_macro_attribute]
pub fn route(args: TokenStream, input: TokenStream) -> TokenStream {
	route::from_input(args, input)
}

/// Creates an `XInput` struct holding the writable fields of the model `X`.
///
/// Fields with `#[serde(skip_deserializing)]` or `#[serde(skip)]` are left out,
/// all other fields are copied verbatim (including attributes). Updates replace
/// every writable field, so the same struct is used to create and to update.
#[proc_macro_attribute]
pub fn model(_args: TokenStream, input: TokenStream) -> TokenStream {
	model::from_input(input)
}
