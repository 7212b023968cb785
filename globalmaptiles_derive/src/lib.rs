//! Attribute macros for `globalmaptiles`.
//!
//! [`macro@context`] wraps the body of a function returning `anyhow::Result<T>`
//! and attaches a formatted message to any error it returns, so callers see
//! which conversion failed and with which inputs.
//!
//! ```
//! use anyhow::{Result, ensure};
//! use globalmaptiles_derive::context;
//!
//! #[context("checking zoom {zoom}")]
//! fn check(zoom: u8) -> Result<u8> {
//! 	ensure!(zoom < 30, "zoom too large");
//! 	Ok(zoom)
//! }
//!
//! let err = check(42).unwrap_err();
//! assert_eq!(format!("{err:#}"), "checking zoom 42: zoom too large");
//! ```

mod args;

use args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs { format, rest } = parse_macro_input!(args);
	let mut input = parse_macro_input!(input as syn::ItemFn);

	if input.sig.asyncness.is_some() {
		return syn::Error::new_spanned(&input.sig.fn_token, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}

	let return_type = match &input.sig.output {
		syn::ReturnType::Default => {
			return syn::Error::new_spanned(&input.sig.ident, "function should return Result")
				.to_compile_error()
				.into();
		}
		syn::ReturnType::Type(_, ty) => ty.clone(),
	};

	let body = &input.block;
	let err = Ident::new("err", Span::mixed_site());
	let result = Ident::new("result", Span::mixed_site());
	let format_args = if rest.is_empty() {
		quote! { #format }
	} else {
		quote! { #format, #rest }
	};

	let new_block: syn::Block = syn::parse_quote! {{
		#[allow(clippy::redundant_closure_call)]
		let #result: #return_type = (|| -> #return_type #body)();
		#result.map_err(|#err| #err.context(format!(#format_args)))
	}};
	*input.block = new_block;

	input.into_token_stream().into()
}
