use std::panic;

pub fn set_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        error!("{}", info);
        default_hook(info);
    }));
}
