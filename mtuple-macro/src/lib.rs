//! Procedural macros used by the [`mtuple`](https://docs.rs/mtuple) crate.
//!
//! The fixed-arity tuples `Tuple1` through `TupleN` differ only in how many slots they have, so
//! rather than writing each of them out by hand, [`impl_tuples!`] generates every one of them and
//! all of their trait implementations from a single template.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Ident, Span, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{parse_macro_input, LitInt},
};

/// Names for the arities that have one, used in generated documentation.
const ARITY_NAMES: &[&str] = &[
    "singleton",
    "pair",
    "triple",
    "quadruple",
    "quintuple",
    "sextuple",
    "septuple",
];

/// Generate the tuple types `Tuple1` through `TupleN` for the given `N`, along with their
/// accessors, conversions, and implementations of the structural traits of the `mtuple` crate.
///
/// This macro is only meaningful when invoked from within the `mtuple` crate itself, because the
/// code it generates refers to that crate's items through `crate::` paths.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(error) => return error.to_compile_error().into(),
    };
    (1..=max).map(tuple).collect::<TokenStream2>().into()
}

/// All the code for the tuple of a single arity.
fn tuple(arity: usize) -> TokenStream2 {
    let name = format_ident!("Tuple{}", arity);
    let params: Vec<Ident> = (1..=arity).map(|i| format_ident!("T{}", i)).collect();
    let fields: Vec<Ident> = (1..=arity).map(|i| format_ident!("item{}", i)).collect();
    let comparer = Ident::new("__C", Span::call_site());

    let description = match ARITY_NAMES.get(arity - 1) {
        Some(word) => format!("A mutable {}-tuple, or {}.", arity, word),
        None => format!("A mutable {}-tuple.", arity),
    };
    let rendered = fields
        .iter()
        .map(Ident::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let struct_doc = format!(
        "{}\n\nEach slot can be read with `itemK`, borrowed mutably with `itemK_mut`, and \
         replaced with `set_itemK`. The tuple renders as `({})`.",
        description, rendered,
    );

    let accessors = params.iter().zip(&fields).enumerate().map(|(i, (param, field))| {
        let field_mut = format_ident!("{}_mut", field);
        let setter = format_ident!("set_{}", field);
        let get_doc = format!("The value of slot {}.", i + 1);
        let mut_doc = format!("A mutable reference to slot {}.", i + 1);
        let set_doc = format!("Overwrite the value of slot {}.", i + 1);
        quote! {
            #[doc = #get_doc]
            pub fn #field(&self) -> &#param {
                &self.#field
            }

            #[doc = #mut_doc]
            pub fn #field_mut(&mut self) -> &mut #param {
                &mut self.#field
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, value: #param) {
                self.#field = value;
            }
        }
    });

    // Slots are rendered separated by ", ", and the closing parenthesis is written by the tuple
    // itself, so that an extended tuple can hand over the tail of its rendering to its rest.
    let render_slots = fields.iter().enumerate().map(|(i, field)| {
        let separator = if i + 1 < arity {
            quote!(out.write_str(", ")?;)
        } else {
            quote!()
        };
        quote! {
            ::std::write!(out, "{}", self.#field)?;
            #separator
        }
    });

    quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default)]
        #[cfg_attr(
            feature = "serde",
            derive(serde_crate::Serialize, serde_crate::Deserialize),
            serde(crate = "serde_crate")
        )]
        pub struct #name<#(#params),*> {
            #(#fields: #params,)*
        }

        impl<#(#params),*> #name<#(#params),*> {
            /// Create a tuple with every slot supplied.
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#fields: #params),*) -> Self {
                #name { #(#fields),* }
            }

            /// Unpack this tuple into a built-in Rust tuple.
            pub fn into_inner(self) -> (#(#params,)*) {
                (#(self.#fields,)*)
            }

            #(#accessors)*
        }

        impl<#(#params),*> ::std::convert::From<(#(#params,)*)> for #name<#(#params),*> {
            fn from((#(#fields,)*): (#(#params,)*)) -> Self {
                #name { #(#fields),* }
            }
        }

        impl<#(#params),*> crate::TupleShape for #name<#(#params),*> {
            fn size(&self) -> usize {
                #arity
            }
        }

        impl<#(#params),*> crate::Render for #name<#(#params),*>
        where
            #(#params: ::std::fmt::Display,)*
        {
            fn render_into(&self, out: &mut dyn ::std::fmt::Write) -> ::std::fmt::Result {
                #(#render_slots)*
                out.write_str(")")
            }
        }

        impl<#(#params),*> ::std::fmt::Display for #name<#(#params),*>
        where
            #(#params: ::std::fmt::Display,)*
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("(")?;
                crate::Render::render_into(self, f)
            }
        }

        impl<#comparer, #(#params),*> crate::StructuralEq<#comparer> for #name<#(#params),*>
        where
            #comparer: ?Sized #(+ crate::Comparer<#params>)*,
        {
            fn equals_with(&self, other: &Self, comparer: &#comparer) -> bool {
                true #(&& <#comparer as crate::Comparer<#params>>::equals(
                    comparer,
                    &self.#fields,
                    &other.#fields,
                ))*
            }
        }

        impl<#comparer, #(#params),*> crate::StructuralOrd<#comparer> for #name<#(#params),*>
        where
            #comparer: ?Sized + crate::Strategy #(+ crate::Comparer<#params>)*,
        {
            fn compare_with(
                &self,
                other: &Self,
                comparer: &#comparer,
            ) -> ::std::result::Result<
                ::std::cmp::Ordering,
                <#comparer as crate::Strategy>::Error,
            > {
                #(
                    match <#comparer as crate::Comparer<#params>>::compare(
                        comparer,
                        &self.#fields,
                        &other.#fields,
                    )? {
                        ::std::cmp::Ordering::Equal => {}
                        unequal => return ::std::result::Result::Ok(unequal),
                    }
                )*
                ::std::result::Result::Ok(::std::cmp::Ordering::Equal)
            }
        }

        impl<#comparer, #(#params),*> crate::StructuralHash<#comparer> for #name<#(#params),*>
        where
            #comparer: ?Sized #(+ crate::Comparer<#params>)*,
        {
            fn hash_with(&self, comparer: &#comparer) -> i32 {
                crate::hash::combine_all(&[
                    #(<#comparer as crate::Comparer<#params>>::hash(comparer, &self.#fields),)*
                ])
            }
        }

        impl<#(#params),*> ::std::cmp::PartialEq for #name<#(#params),*>
        where
            #(#params: crate::Element,)*
        {
            fn eq(&self, other: &Self) -> bool {
                crate::StructuralEq::equals_with(self, other, &crate::Natural)
            }
        }

        impl<#(#params),*> ::std::cmp::Eq for #name<#(#params),*>
        where
            #(#params: crate::Element,)*
        {
        }

        impl<#(#params),*> ::std::cmp::PartialOrd for #name<#(#params),*>
        where
            #(#params: crate::Element,)*
        {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl<#(#params),*> ::std::cmp::Ord for #name<#(#params),*>
        where
            #(#params: crate::Element,)*
        {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                match crate::StructuralOrd::compare_with(self, other, &crate::Natural) {
                    ::std::result::Result::Ok(ordering) => ordering,
                    ::std::result::Result::Err(never) => match never {},
                }
            }
        }

        impl<#(#params),*> ::std::hash::Hash for #name<#(#params),*>
        where
            #(#params: crate::Element,)*
        {
            fn hash<__H: ::std::hash::Hasher>(&self, state: &mut __H) {
                state.write_i32(crate::StructuralHash::hash_with(self, &crate::Natural));
            }
        }

        impl<#(#params),*> crate::Element for #name<#(#params),*>
        where
            #(#params: crate::Element,)*
        {
            fn element_eq(&self, other: &Self) -> bool {
                crate::StructuralEq::equals_with(self, other, &crate::Natural)
            }

            fn element_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::std::cmp::Ord::cmp(self, other)
            }

            fn element_hash(&self) -> i32 {
                crate::StructuralHash::hash_with(self, &crate::Natural)
            }
        }
    }
}
