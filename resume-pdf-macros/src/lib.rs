use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Ident, ItemFn, LitInt};

/// Turn a function that draws onto a `PdfSurface` into a test.
///
/// The generated test finishes the surface with the uncompressed test settings
/// and checks the structure of the produced document. An optional integer
/// argument gives the number of pages the document is expected to have
/// (one by default).
#[proc_macro_attribute]
pub fn snapshot(attr: TokenStream, item: TokenStream) -> TokenStream {
    let pages = if attr.is_empty() {
        1usize
    } else {
        let lit = parse_macro_input!(attr as LitInt);
        match lit.base10_parse::<usize>() {
            Ok(pages) => pages,
            Err(err) => return err.to_compile_error().into(),
        }
    };

    let mut input_fn = parse_macro_input!(item as ItemFn);
    let fn_name = input_fn.sig.ident.clone();
    let snapshot_name = fn_name.to_string();

    let impl_ident = Ident::new(&format!("{}_impl", fn_name), fn_name.span());
    input_fn.sig.ident = impl_ident.clone();

    let expanded: proc_macro2::TokenStream = quote! {
        #input_fn

        #[test]
        fn #fn_name() {
            let mut surface = crate::surface::PdfSurface::new(
                crate::page::PageSettings::default(),
                crate::tests::settings_1(),
            );
            #impl_ident(&mut surface);
            let pdf = surface.finish().unwrap();
            crate::tests::check_pdf(#snapshot_name, &pdf, #pages);
        }
    };

    expanded.into()
}
