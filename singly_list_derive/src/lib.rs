use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro for owned singly linked list nodes.
///
/// The struct must have exactly two named fields: `link`, a `SingleLink`,
/// and `data`, the element. The macro implements `Link` by delegating to
/// `link` and `NodeWithData` over `data`.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn crate_path(input: &DeriveInput) -> syn::Result<TokenStream2> {
    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let path = attr.parse_args::<NodeAttribute>()?.crate_path;
            return Ok(quote! { #path });
        }
    }
    Ok(quote! { ::singly_list })
}

fn node_fields(input: &DeriveInput) -> syn::Result<(Field, Field)> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        ));
    };

    let mut link_field = None;
    let mut data_field = None;
    for field in fields.named.iter() {
        if let Some(ident) = &field.ident {
            match ident.to_string().as_str() {
                "link" => link_field = Some(field.clone()),
                "data" => data_field = Some(field.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "Unexpected field name: expected 'link' or 'data'",
                    ));
                }
            }
        }
    }

    let link_field = link_field.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'link'")
    })?;
    let data_field = data_field.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'data'")
    })?;
    Ok((link_field, data_field))
}

fn check_link_type(link_type: &Type) -> syn::Result<()> {
    let Type::Path(TypePath { path, .. }) = link_type else {
        return Err(syn::Error::new_spanned(link_type, "Field 'link' must be a Link type"));
    };
    match path.segments.last() {
        Some(segment) if segment.ident == "SingleLink" => Ok(()),
        _ => Err(syn::Error::new_spanned(
            link_type,
            "Field 'link' must be a 'SingleLink'",
        )),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let crate_path = crate_path(&input)?;
    let (link_field, data_field) = node_fields(&input)?;
    check_link_type(&link_field.ty)?;

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let traits_path = quote! { #crate_path::linked_list::traits };
    let node_ref = quote! { #crate_path::linked_list::node::NodeRef };
    let data_type = &data_field.ty;

    Ok(quote! {
        impl #impl_generics #traits_path::Link for #struct_name #ty_generics #where_clause {
            #[inline]
            fn next(&self) -> Option<#node_ref> {
                #traits_path::Link::next(&self.link)
            }

            #[inline]
            fn set_next(&mut self, next: Option<#node_ref>) {
                #traits_path::Link::set_next(&mut self.link, next);
            }
        }

        impl #impl_generics #traits_path::NodeWithData for #struct_name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }

            #[inline]
            fn into_data(self) -> Self::Data {
                self.data
            }
        }
    })
}
