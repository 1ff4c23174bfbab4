extern crate dynamic_gl3;

use dynamic_gl3::load_gl;

pub fn main() {
    // Without a current context the version query has nothing to report, so
    // this mostly shows which entry points the system library exports.
    match load_gl() {
        Ok(loader) => {
            println!("Successfully loaded GL {}", loader.version().unwrap());
            println!("3.3 core supported: {}", loader.is_supported(3, 3));
            println!("{:#?}", loader);
        }
        Err(e) => println!("Couldn't load GL: {}", e),
    }

    for name in &["glGetIntegerv", "glDrawArrays", "glNotARealFunction"] {
        println!(
            "{}: {}",
            name,
            if dynamic_gl3::get_proc_address(name).is_some() {
                "found"
            } else {
                "missing"
            }
        );
    }
}
