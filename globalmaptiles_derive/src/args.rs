use proc_macro2::TokenStream as TokenStream2;
use syn::{
	LitStr, Token,
	parse::{self, Parse, ParseStream},
};

/// Arguments of `#[context(...)]`: a format string followed by its optional arguments.
#[derive(Debug)]
pub struct ContextArgs {
	pub format: LitStr,
	pub rest: TokenStream2,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let format: LitStr = input.parse()?;
		let rest = if input.is_empty() {
			TokenStream2::new()
		} else {
			input.parse::<Token![,]>()?;
			input.parse()?
		};
		Ok(Self { format, rest })
	}
}
