use super::{ErrorSet, RenameRule};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the struct field
    pub(crate) ident: syn::Ident,

    /// Name the field is addressed by in path expressions
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

impl Field {
    pub(super) fn from_ast(
        field: &syn::Field,
        rename_all: Option<RenameRule>,
    ) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "mappable fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut rename = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("remap") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }

                    let lit: syn::LitStr = meta.value()?.parse()?;
                    if !is_path_ident(&lit.value()) {
                        return Err(syn::Error::new_spanned(
                            &lit,
                            "field names must start with a letter, `_` or `$` and contain \
                             only letters, digits, `_`, `$` or `-`",
                        ));
                    }

                    rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute; expected `rename = \"...\"`"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = match (rename, rename_all) {
            (Some(name), _) => name,
            (None, Some(rule)) => rule.apply(&ident.unraw().to_string()),
            (None, None) => ident.unraw().to_string(),
        };

        Ok(Self {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
        })
    }
}

/// Whether `name` can be written as a segment of a path expression.
fn is_path_ident(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-'))
}
