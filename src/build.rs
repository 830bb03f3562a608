// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/dpl_filter.ico");
        res.compile().unwrap();
    }
}
