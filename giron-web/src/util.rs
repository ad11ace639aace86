/// The backend lives on the same origin as the app
pub fn origin() -> String {
    web_sys::window()
        .expect("no window in this environment")
        .location()
        .origin()
        .expect("window location has no origin")
}
