use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for `IntoRow` trait.
///
/// Generates an implementation that turns each field into one column value,
/// in declaration order. Every field type must implement `Into<Value>`.
///
/// # Example
///
/// ```ignore
/// #[derive(IntoRow)]
/// struct User {
///     id: u64,
///     name: String,
///     email: Option<String>,
/// }
///
/// rs.add_row(User { id: 1, name: "alice".into(), email: None })?;
/// ```
#[proc_macro_derive(IntoRow)]
pub fn derive_into_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new(
                    input.ident.span(),
                    "IntoRow only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(input.ident.span(), "IntoRow only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let field_names: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let num_fields = field_names.len();

    let expanded = quote! {
        impl #impl_generics ::mysql_wire::IntoRow for #name #ty_generics #where_clause {
            fn into_row(self) -> ::std::vec::Vec<::mysql_wire::Value> {
                let mut __row = ::std::vec::Vec::with_capacity(#num_fields);
                #(
                    __row.push(::mysql_wire::Value::from(self.#field_names));
                )*
                __row
            }
        }
    };

    TokenStream::from(expanded)
}
