use anyhow::Result;
use pii_core::Category;

pub fn handle() -> Result<()> {
    println!("Categories:");
    for category in Category::ALL {
        println!("  {:<16} {}", category.as_str(), category.placeholder());
    }
    Ok(())
}
