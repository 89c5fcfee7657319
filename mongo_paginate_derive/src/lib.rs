use darling::FromDeriveInput;
use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[derive(FromDeriveInput, Default)]
#[darling(default, attributes(paginate))]
struct Opts {
    collection: String,
}

#[proc_macro_derive(Paginate, attributes(paginate))]
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input);
    let opts = Opts::from_derive_input(&input).expect("Wrong options");
    let DeriveInput { ident, .. } = input;
    let collection = opts.collection;

    let output = quote! {
        impl ::mongo_paginate::Paginate for #ident {
            const COLLECTION_NAME: &'static str = #collection;
        }
    };

    output.into()
}
