//! Headless walkthrough of the web front end.
//!
//! Run with: cargo run --example web_walkthrough
//!
//! Clicks through a few calculations against the mock DOM and prints the
//! page state after each step, the same way the browser build would render
//! it.

use tenkey::wasm::WasmDriver;

fn show(driver: &WasmDriver, step: &str) {
    println!("== {step}");
    println!("   display: {}", driver.display_text().unwrap_or("?"));
    println!("   status:  {}", driver.status_text().unwrap_or("?"));
    for item in driver.tape_items() {
        println!("   tape:    {item}");
    }
    println!();
}

fn main() {
    let mut driver = WasmDriver::new();
    show(&driver, "fresh page");

    for id in ["key-6", "key-plus", "key-4", "key-equals"] {
        driver.click(id);
    }
    show(&driver, "clicked 6 + 4 =");

    for key in ["2", "+", "3", "*", "4", "Enter"] {
        driver.send_key(key);
    }
    show(&driver, "typed 2 + 3 * 4 (collapses left to right)");

    for id in ["key-5", "key-divide", "key-0", "key-equals"] {
        driver.click(id);
    }
    show(&driver, "clicked 5 / 0 =");

    driver.click("key-clear");
    show(&driver, "clicked C");

    println!("events recorded: {}", driver.dom().event_history().len());
}
