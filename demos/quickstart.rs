use chrono::Local;
use jalali_views::{JalaliDate, RelativeViews, WeekStartPolicy};

fn main() -> jalali_views::Result<()> {
    let now = JalaliDate::now()?;
    println!("Now: {now}");
    println!("Short: {}", now.to_short_date_string());
    println!("Long: {}", now.format("dmyw"));

    let views = RelativeViews::build(Local::now().naive_local(), WeekStartPolicy::Jalali)?;
    for view in &views {
        println!("{view}: {} → {}", view.from_date(), view.to_date());
    }
    Ok(())
}
