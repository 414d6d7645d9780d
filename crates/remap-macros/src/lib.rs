extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Mappable` and `FieldValue` for a struct with named fields.
///
/// Fields are addressed by their Rust name unless renamed:
///
/// * `#[remap(rename_all = "camelCase")]` on the struct applies a case
///   convention to every field (`snake_case`, `PascalCase`, `kebab-case` and
///   `SCREAMING_SNAKE_CASE` are also accepted);
/// * `#[remap(rename = "nom")]` on a field sets its name outright.
#[proc_macro_derive(Mappable, attributes(remap))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    match remap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
