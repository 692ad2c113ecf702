mod app;
mod layouts;
mod pages;
mod router;
mod styles;
#[cfg(test)]
mod test_support;

fn main() {
    dioxus::launch(app::App);
}
