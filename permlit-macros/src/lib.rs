//! Attribute macros for permlit
//!
//! These macros are the discovery front end: they read annotated module
//! declarations, hand typed records to `permlit-core`, and splice the
//! generated literals back into the module. All name derivation lives in
//! the core; this crate only maps syntax to records and records to items.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Attribute, Ident, Item, ItemMod, LitStr, Token, Type};

use permlit_core::{
    generate, generate_repo, ContainerDescriptor, GeneratedSource, SlotRecord, StoreFlags,
    Visibility,
};

/// Generates permission-name literals for a configurable store module.
///
/// Every `static` or `const` of type `&str` inside the annotated inline
/// module is a permission slot; its placeholder initializer is replaced by
/// the derived permission name. Other items pass through untouched.
///
/// Flags (any subset, any order): `parse_prefix`, `obfuscate`, `upper_case`,
/// `all_permissions`.
///
/// # Usage
///
/// ```ignore
/// use permlit::permissions_store;
///
/// #[permissions_store(parse_prefix, all_permissions)]
/// pub mod permissions {
///     #[prefix("DataUser")]
///     pub static LorescopesRead: &str = "";
///
///     pub static AccountRead: &str = "";
/// }
/// ```
///
/// This will generate:
///
/// ```ignore
/// pub mod permissions {
///     pub static LorescopesRead: &str = "data.user.lorescopes.read";
///     pub static AccountRead: &str = "account.read";
///     pub fn all_permissions() -> &'static [&'static str] {
///         &["data.user.lorescopes.read", "account.read"]
///     }
/// }
/// ```
///
/// A slot may carry several `#[prefix(...)]` attributes; only the first one
/// is honored, silently, matching the store's documented first-wins rule.
/// The module must be inline (`mod m { .. }`): an out-of-line `mod m;`
/// cannot receive re-emitted items and fails with diagnostic PL0001.
#[proc_macro_attribute]
pub fn permissions_store(args: TokenStream, input: TokenStream) -> TokenStream {
    let module = parse_macro_input!(input as ItemMod);
    let flags = match parse_flags(args.into()) {
        Ok(flags) => flags,
        Err(err) => return err.to_compile_error().into(),
    };
    expand(module, flags, Flavor::Store)
}

/// Generates permission-name literals for a flat repo module.
///
/// Like [`macro@permissions_store`] but with no post-processing options:
/// names stay as composed at discovery (verbatim prefix tokens, segmented
/// lower-cased identity) and no enumeration function is emitted.
///
/// # Usage
///
/// ```ignore
/// use permlit::permissions_repo;
///
/// #[permissions_repo]
/// pub mod permissions {
///     #[prefix("DataUser")]
///     pub static LorescopesRead: &str = "";
/// }
/// ```
#[proc_macro_attribute]
pub fn permissions_repo(args: TokenStream, input: TokenStream) -> TokenStream {
    let module = parse_macro_input!(input as ItemMod);
    if !args.is_empty() {
        return syn::Error::new_spanned(
            TokenStream2::from(args),
            "permissions_repo takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    expand(module, StoreFlags::default(), Flavor::Repo)
}

enum Flavor {
    Store,
    Repo,
}

fn expand(module: ItemMod, flags: StoreFlags, flavor: Flavor) -> TokenStream {
    match try_expand(module, flags, flavor) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn try_expand(module: ItemMod, flags: StoreFlags, flavor: Flavor) -> syn::Result<TokenStream2> {
    let mod_name = module.ident.to_string();
    let re_emittable = module.content.is_some();

    let mut passthrough: Vec<Item> = Vec::new();
    let mut builder = ContainerDescriptor::builder(&mod_name)
        .flags(flags)
        .re_emittable(re_emittable);

    if let Some((_, items)) = &module.content {
        for item in items {
            match discover_slot(item)? {
                Some(slot) => builder = builder.slot(slot),
                None => passthrough.push(item.clone()),
            }
        }
    }

    let result = match flavor {
        Flavor::Store => generate(builder.build()),
        Flavor::Repo => generate_repo(builder.build()),
    };
    let source = match result {
        Ok(source) => source,
        Err(diagnostic) => {
            let message = format!("[{}] {}", diagnostic.rule.id(), diagnostic.message);
            return Err(syn::Error::new(module.ident.span(), message));
        }
    };
    let generated = parse_generated(&source, &module.ident)?;

    // Inner attributes would land outside the rebuilt module; keep outer only.
    let attrs: Vec<&Attribute> = module
        .attrs
        .iter()
        .filter(|attr| matches!(attr.style, syn::AttrStyle::Outer))
        .collect();
    let vis = &module.vis;
    let ident = &module.ident;
    Ok(quote! {
        #(#attrs)*
        #[allow(non_upper_case_globals)]
        #vis mod #ident {
            #(#passthrough)*
            #generated
        }
    })
}

/// Returns the slot record for a string-typed `static`/`const` item, or
/// `None` for anything else (silent exclusion, per the discovery rule).
fn discover_slot(item: &Item) -> syn::Result<Option<SlotRecord>> {
    let (ident, vis, attrs, ty, is_static) = match item {
        Item::Static(item) => (&item.ident, &item.vis, &item.attrs, &*item.ty, true),
        Item::Const(item) => (&item.ident, &item.vis, &item.attrs, &*item.ty, false),
        _ => return Ok(None),
    };
    if !is_str_ref(ty) {
        return Ok(None);
    }
    let prefix_tokens = first_prefix_tokens(attrs);
    let slot = SlotRecord::new(ident.to_string(), map_visibility(vis), is_static, prefix_tokens)
        .map_err(|err| syn::Error::new(ident.span(), err.to_string()))?;
    Ok(Some(slot))
}

/// Matches `&str` and `&'static str`.
fn is_str_ref(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => match &*reference.elem {
            Type::Path(path) => path.path.is_ident("str"),
            _ => false,
        },
        _ => false,
    }
}

fn map_visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(restricted) => {
            if restricted.path.is_ident("crate") {
                Visibility::Internal
            } else if restricted.path.is_ident("super") {
                Visibility::Protected
            } else if restricted.path.is_ident("self") {
                Visibility::Private
            } else {
                Visibility::Internal
            }
        }
        syn::Visibility::Inherited => Visibility::Private,
    }
}

/// Prefix tokens from the first `#[prefix("A", "B")]` attribute on an item.
/// Later prefix attributes are dropped silently (first wins). A missing or
/// malformed attribute means no prefix, never an error.
fn first_prefix_tokens(attrs: &[Attribute]) -> Vec<String> {
    for attr in attrs {
        if attr.path().is_ident("prefix") {
            let Ok(list) = attr.meta.require_list() else {
                return Vec::new();
            };
            let literals = syn::parse::Parser::parse2(
                Punctuated::<LitStr, Token![,]>::parse_terminated,
                list.tokens.clone(),
            );
            return match literals {
                Ok(literals) => literals.into_iter().map(|lit| lit.value()).collect(),
                Err(_) => Vec::new(),
            };
        }
    }
    Vec::new()
}

/// Parse the core's flag idents from the attribute arguments.
fn parse_flags(args: TokenStream2) -> syn::Result<StoreFlags> {
    let idents = syn::parse::Parser::parse2(Punctuated::<Ident, Token![,]>::parse_terminated, args)?;
    let mut flags = StoreFlags::default();
    for ident in idents {
        match ident.to_string().as_str() {
            "obfuscate" => flags.obfuscate = true,
            "upper_case" => flags.upper_case = true,
            "parse_prefix" => flags.parse_prefix = true,
            "all_permissions" => flags.all_permissions = true,
            other => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown permissions_store flag `{other}`"),
                ));
            }
        }
    }
    Ok(flags)
}

/// Re-parse the assembled declaration text into tokens for the rebuilt
/// module. The text is valid Rust by construction; a parse failure means a
/// bug in the assembler, not in user code.
fn parse_generated(source: &GeneratedSource, ident: &Ident) -> syn::Result<TokenStream2> {
    let mut generated = TokenStream2::new();
    for item in &source.items {
        let tokens: TokenStream2 = item.parse().map_err(|err| {
            syn::Error::new(
                ident.span(),
                format!("generated declaration failed to parse: {err}"),
            )
        })?;
        generated.extend(tokens);
    }
    Ok(generated)
}
