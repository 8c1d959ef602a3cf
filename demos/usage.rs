use karnaugh::*;

fn main() -> Result<(), KarnaughError> {
    let mut map = KMap::new(Form::Sop);
    map.set_expression("AB' + AB'C + A'B'C'D'")?;

    println!("{}", &map);
    println!("Minimized: {}", map.expression());
    for grouping in map.groupings() {
        println!("  {} cells {} ({})", grouping.size(), grouping, grouping.color());
    }

    // toggle a cell and watch the cover adapt
    map.cycle_cell(Cell::from(1));
    println!("After toggling cell 1: {}", map.expression());

    // the same function as a product of sums
    map.set_form(Form::Pos);
    println!("As POS: {}", map.expression());

    map.reset();
    println!("After a reset: {}", map.expression());
    Ok(())
}
