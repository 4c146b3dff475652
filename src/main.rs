use growable_array::collections::contiguous::GrowableArray;
use growable_array::collections::contiguous::growable_array::GrowableArrayError;

fn main() -> Result<(), GrowableArrayError> {
    println!("\n[GrowableArray]\n");

    let mut arr = GrowableArray::<String>::with_cap(16)?;
    println!("{:?}", arr);

    // set appends when writing at the current length.
    for i in 0..arr.cap() {
        arr.set(i, i.to_string())?;
    }
    println!("{:?}", arr);
    println!("{}", arr);

    arr.reset();
    println!("{:?}", arr);

    Ok(())
}
