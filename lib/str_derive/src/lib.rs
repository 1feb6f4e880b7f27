use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derives `Display` and `FromStr` for an enum through its serde representation,
/// so `Room::Office` prints as whatever `#[serde(rename_all)]` says it is.
///
/// Enums made only of unit variants also get `const fn all()` listing every
/// variant in declaration order.
#[proc_macro_derive(Str)]
pub fn str_macro_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let name = &ast.ident;

    let Data::Enum(data) = &ast.data else {
        return quote! { compile_error!("Str supports only enums"); }.into();
    };

    let unit_variants = data
        .variants
        .iter()
        .filter(|variant| matches!(variant.fields, Fields::Unit))
        .map(|variant| &variant.ident)
        .collect::<Vec<_>>();

    let all = if unit_variants.len() == data.variants.len() {
        let count = unit_variants.len();

        quote! {
            impl #name {
                pub const fn all() -> [#name; #count] {
                    [#(#name::#unit_variants),*]
                }
            }
        }
    } else {
        quote! {}
    };

    let gen = quote! {
        impl std::fmt::Display for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                serde::Serialize::serialize(self, f)
            }
        }

        impl std::str::FromStr for #name {
            type Err = serde::de::value::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                use serde::de::IntoDeserializer;

                <Self as serde::Deserialize>::deserialize(s.into_deserializer())
            }
        }

        #all
    };

    gen.into()
}
