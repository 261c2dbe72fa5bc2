use doubly_list::DoublyLinkedList;

fn main() {
    let mut list = DoublyLinkedList::new();

    for value in 0..7 {
        list.push_back(value);
    }
    dbg!(&list);

    let first = list.pop_front();
    dbg!(&list);

    if let Some(value) = first {
        list.push_front(value);
    }
    list.pop_back();
    dbg!(&list);

    for query in [0, 3, 6, -1] {
        match list.find(query) {
            Some(index) => println!("found {query} at index {index}"),
            None => println!("can't find {query}"),
        }
    }
}
