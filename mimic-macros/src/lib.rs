use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input};

/// Derive macro for implementing the `Class` trait.
///
/// Also implements `From<T> for Value`, wrapping the value as an instance.
/// The class name defaults to the type name:
///
/// ```rust,ignore
/// #[derive(Debug, Class)]
/// #[class(name = "Person")]
/// struct PersonRecord { first: String, last: String }
/// ```
#[proc_macro_derive(Class, attributes(class))]
pub fn derive_class(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_class(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_class(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Class cannot be derived for generic types",
        ));
    }

    let class_name = match class_name(input)? {
        Some(lit) => lit,
        None => LitStr::new(&name.to_string(), name.span()),
    };

    Ok(quote! {
        impl ::mimic::Class for #name {
            const NAME: &'static str = #class_name;
        }

        impl ::core::convert::From<#name> for ::mimic::Value {
            fn from(value: #name) -> Self {
                ::mimic::Value::instance(value)
            }
        }
    })
}

/// Reads `#[class(name = "...")]`.
fn class_name(input: &DeriveInput) -> syn::Result<Option<LitStr>> {
    let mut found = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("class")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().trim().is_empty() {
                    return Err(meta.error("class name must not be empty"));
                }
                found = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unknown class attribute, expected `name`"))
            }
        })?;
    }
    Ok(found)
}
