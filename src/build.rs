// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/ff_scrape.ico");    // multi-size .ico
        if let Err(e) = res.compile() {
            println!("cargo:warning=winres failed: {}", e);
        }
    }
}
