#[cfg(not(feature = "debug_log"))]
macro_rules! debug_log {
    () => {};
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug_log")]
macro_rules! debug_log {
    () => {
        println!("| debug |");
    };
    ($($arg:tt)*) => {
        println!("| debug | {}", format_args!($($arg)*));
    };
}
