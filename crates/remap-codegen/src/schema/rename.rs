use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Case convention applied to every field name by `#[remap(rename_all)]`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RenameRule {
    CamelCase,
    SnakeCase,
    PascalCase,
    KebabCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub(crate) fn from_lit(lit: &syn::LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "snake_case" => Ok(Self::SnakeCase),
            "PascalCase" => Ok(Self::PascalCase),
            "kebab-case" => Ok(Self::KebabCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            _ => Err(syn::Error::new_spanned(
                lit,
                "unknown rename rule; expected one of `camelCase`, `snake_case`, \
                 `PascalCase`, `kebab-case`, `SCREAMING_SNAKE_CASE`",
            )),
        }
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::CamelCase => name.to_lower_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::PascalCase => name.to_upper_camel_case(),
            Self::KebabCase => name.to_kebab_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}
