use super::{ErrorSet, Field, RenameRule};

use std::collections::HashSet;

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Mappable` can only be derived for structs with named fields",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "mappable fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "mappable types cannot be generic",
            ));
        }

        let rename_all = parse_rename_all(&ast.attrs)?;

        let mut errs = ErrorSet::new();
        let mut fields = vec![];
        let mut names = HashSet::new();

        for node in &node.named {
            match Field::from_ast(node, rename_all) {
                Ok(field) => {
                    if !names.insert(field.name.clone()) {
                        errs.push(syn::Error::new_spanned(
                            node,
                            format!("duplicate field name `{}`", field.name),
                        ));
                    }
                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}

fn parse_rename_all(attrs: &[syn::Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut rename_all = None;

    for attr in attrs {
        if !attr.path().is_ident("remap") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                if rename_all.is_some() {
                    return Err(meta.error("duplicate `rename_all`"));
                }

                let lit: syn::LitStr = meta.value()?.parse()?;
                rename_all = Some(RenameRule::from_lit(&lit)?);
                Ok(())
            } else {
                Err(meta.error("unknown struct attribute; expected `rename_all = \"...\"`"))
            }
        })?;
    }

    Ok(rename_all)
}
