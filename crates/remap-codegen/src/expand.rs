use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for remap types
    remap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let mappable = self.expand_mappable_impl();
        let field_value = self.expand_field_value_impl();

        wrap_in_const(quote! {
            #mappable
            #field_value
        })
    }

    fn expand_mappable_impl(&self) -> TokenStream {
        let remap = &self.remap;
        let ident = &self.model.ident;
        let model_name = ident.to_string();
        let num_fields = self.model.fields.len();

        let schema_fields = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.ty;
            quote! {
                #remap::Field::new(#name, <#ty as #remap::FieldValue>::ty())
            }
        });

        let record_fields = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let field_ident = &field.ident;
            quote! {
                record.insert(#name, #remap::FieldValue::to_value(&self.#field_ident));
            }
        });

        let load_fields = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let field_ident = &field.ident;
            quote! {
                #field_ident: #remap::load_field(&mut record, #model_name, #name)?,
            }
        });

        quote! {
            impl #remap::Mappable for #ident {
                fn model() -> &'static #remap::Model {
                    static MODEL: #remap::OnceLock<#remap::Model> = #remap::OnceLock::new();
                    MODEL.get_or_init(|| {
                        #remap::Model::new(#model_name, vec![ #( #schema_fields, )* ])
                    })
                }

                fn to_record(&self) -> #remap::Record {
                    let mut record = #remap::Record::with_capacity(#num_fields);
                    #( #record_fields )*
                    record
                }

                fn load(mut record: #remap::Record) -> #remap::Result<Self> {
                    #remap::Result::Ok(Self {
                        #( #load_fields )*
                    })
                }
            }
        }
    }

    fn expand_field_value_impl(&self) -> TokenStream {
        let remap = &self.remap;
        let ident = &self.model.ident;
        let model_name = ident.to_string();

        quote! {
            impl #remap::FieldValue for #ident {
                fn ty() -> #remap::Type {
                    #remap::Type::Model(#remap::ModelRef::of::<Self>())
                }

                fn to_value(&self) -> #remap::Value {
                    #remap::Value::Record(<Self as #remap::Mappable>::to_record(self))
                }

                fn load(value: #remap::Value) -> #remap::Result<Self> {
                    match value {
                        #remap::Value::Record(record) => <Self as #remap::Mappable>::load(record),
                        value => #remap::Result::Err(#remap::Error::type_conversion(value, #model_name)),
                    }
                }
            }
        }
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        remap: quote!(_remap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use remap as _remap;
            #code
        };
    }
}
