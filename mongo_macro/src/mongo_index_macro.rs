use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parse;
use syn::{parse_macro_input, Attribute, DeriveInput, LitStr, Token};

/// 单条 `#[mongo_index(...)]` 的解析结果
struct IndexSpec {
    fields: Vec<(String, i32)>,
    unique: bool,
    name: Option<String>,
}

pub fn expand_index_model_provider(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;

    let mut index_exprs = vec![];
    for attr in ast.attrs.iter().filter(|a| a.path().is_ident("mongo_index")) {
        match parse_index(attr) {
            Ok(spec) => index_exprs.push(index_model_tokens(&spec)),
            Err(e) => return e.to_compile_error().into(),
        }
    }

    let expanded = quote! {
        impl ::common::index_trait::MongoIndexModelProvider for #name {
            fn index_models() -> Vec<::mongodb::IndexModel> {
                vec![
                    #(#index_exprs),*
                ]
            }
        }
    };

    expanded.into()
}

fn parse_index(attr: &Attribute) -> syn::Result<IndexSpec> {
    let mut raw_fields: Vec<LitStr> = vec![];
    let mut unique = false;
    let mut default_order = 1i32;
    let mut name = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("fields") {
            let content;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(<LitStr as Parse>::parse, Token![,])?;
            raw_fields.extend(list);
        } else if meta.path.is_ident("unique") {
            unique = true;
        } else if meta.path.is_ident("order") {
            let content;
            syn::parenthesized!(content in meta.input);
            let lit: LitStr = content.parse()?;
            default_order = parse_direction(&lit)?;
        } else if meta.path.is_ident("name") {
            let content;
            syn::parenthesized!(content in meta.input);
            let lit: LitStr = content.parse()?;
            name = Some(lit.value());
        } else {
            return Err(meta.error("unsupported mongo_index option, expected fields/unique/order/name"));
        }
        Ok(())
    })?;

    if raw_fields.is_empty() {
        return Err(syn::Error::new_spanned(attr, "mongo_index requires at least one field"));
    }

    let mut fields = vec![];
    for lit in &raw_fields {
        let value = lit.value();
        let entry = match value.split_once(':') {
            Some((field, dir)) => (field.trim().to_string(), parse_direction(&LitStr::new(dir.trim(), lit.span()))?),
            None => (value.trim().to_string(), default_order),
        };
        fields.push(entry);
    }

    Ok(IndexSpec { fields, unique, name })
}

fn parse_direction(lit: &LitStr) -> syn::Result<i32> {
    match lit.value().to_ascii_lowercase().as_str() {
        "asc" | "1" => Ok(1),
        "desc" | "-1" => Ok(-1),
        _ => Err(syn::Error::new(lit.span(), "index direction must be asc or desc")),
    }
}

/// 未命名时沿用 mongo 的默认命名规则 `field_dir_field_dir`，便于按名字比对已有索引
fn default_index_name(fields: &[(String, i32)]) -> String {
    fields.iter().map(|(f, d)| format!("{}_{}", f, d)).collect::<Vec<_>>().join("_")
}

fn index_model_tokens(spec: &IndexSpec) -> TokenStream {
    let inserts = spec.fields.iter().map(|(field, dir)| {
        quote! { keys.insert(#field, #dir); }
    });
    let index_name = spec.name.clone().unwrap_or_else(|| default_index_name(&spec.fields));
    let unique = if spec.unique { quote! { Some(true) } } else { quote! { None::<bool> } };

    quote! {
        ::mongodb::IndexModel::builder()
            .keys({
                let mut keys = ::mongodb::bson::Document::new();
                #(#inserts)*
                keys
            })
            .options(Some(
                ::mongodb::options::IndexOptions::builder()
                    .unique(#unique)
                    .name(Some(#index_name.to_string()))
                    .build(),
            ))
            .build()
    }
}
