use range_list::RangeList;

fn print(list: &RangeList) {
    println!("{}", list.render());
}

fn main() {
    // construct a subscriber that prints formatted traces to stdout
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut list = RangeList::new();

    let _ = list.add(&[1, 5]);
    print(&list); // [1, 5)
    let _ = list.add(&[10, 20]);
    print(&list); // [1, 5) [10, 20)
    let _ = list.add(&[20, 20]);
    print(&list); // [1, 5) [10, 20)
    let _ = list.add(&[20, 21]);
    print(&list); // [1, 5) [10, 21)
    let _ = list.add(&[2, 4]);
    print(&list); // [1, 5) [10, 21)
    let _ = list.add(&[3, 8]);
    print(&list); // [1, 8) [10, 21)
    let _ = list.remove(&[10, 10]);
    print(&list); // [1, 8) [10, 21)
    let _ = list.remove(&[10, 11]);
    print(&list); // [1, 8) [11, 21)
    let _ = list.remove(&[15, 17]);
    print(&list); // [1, 8) [11, 15) [17, 21)
    let _ = list.add(&[-4, 10]);
    print(&list); // [-4, 10) [11, 15) [17, 21)
    let _ = list.remove(&[3, 19]);
    print(&list); // [-4, 3) [19, 21)

    // rejected and logged, the list stays as it is
    let _ = list.add(&[1, 2, 3, 4]);
    let _ = list.add::<i32>(&[]);
    let _ = list.add(&[1]);
    let _ = list.add(&[f64::NAN, 1.44]);

    let _ = list.add(&[2.2, 9.11]);
    print(&list); // [-4, 9) [19, 21)
    let _ = list.remove(&[20, -50]);
    print(&list); // [20, 21)
    let _ = list.add(&[-4, 24]);
    print(&list); // [-4, 24)
    let _ = list.remove(&[-1, 20]);
    print(&list); // [-4, -1) [20, 24)
    let _ = list.add(&[-3, -1]);
    print(&list); // [-4, -1) [20, 24)
    let _ = list.remove(&[22, 29]);
    print(&list); // [-4, -1) [20, 22)
}
