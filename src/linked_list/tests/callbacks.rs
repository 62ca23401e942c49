extern crate std;

use core::cell::RefCell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec;
use std::vec::Vec;

use crate::linked_list::{builder::LinkedListBuilder, list::LinkedList};

fn recording_list(log: &Rc<RefCell<Vec<i32>>>) -> LinkedList<i32> {
    let log = Rc::clone(log);
    LinkedList::with_destroy(
        |a: &i32, b: &i32| a == b,
        move |v| log.borrow_mut().push(v),
    )
}

#[test]
fn test_drop_destroys_each_element_in_chain_order() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut list = recording_list(&log);
    list.add_head(1);
    list.add_head(2);
    list.add_head(3);

    drop(list);
    assert_eq!(*log.borrow(), vec![3, 2, 1]);
}

#[test]
fn test_remove_destroys_only_removed_element() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut list = recording_list(&log);
    list.add_head(1);
    list.add_head(2);

    assert!(list.remove(&1));
    assert_eq!(*log.borrow(), vec![1]);

    assert!(!list.remove(&1));
    assert_eq!(*log.borrow(), vec![1]);

    drop(list);
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn test_pop_and_remove_node_skip_destroy() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut list = recording_list(&log);
    let one = list.add_head(1);
    list.add_head(2);

    assert_eq!(list.pop_head(), Some(2));
    assert_eq!(list.remove_node(one), Some(1));
    drop(list);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_clear_keeps_list_usable() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut list = recording_list(&log);
    for i in 0..4 {
        list.add_head(i);
    }

    list.clear();
    assert!(list.is_empty());
    assert_eq!(*log.borrow(), vec![3, 2, 1, 0]);

    list.add_head(7);
    assert_eq!(list.count(), 1);
    drop(list);
    assert_eq!(log.borrow().len(), 5);
}

#[test]
fn test_without_destroy_elements_are_dropped() {
    let tracker = Rc::new(());
    let mut list = LinkedListBuilder::new()
        .compare(|a: &Rc<()>, b: &Rc<()>| Rc::ptr_eq(a, b))
        .build();
    list.add_head(Rc::clone(&tracker));
    list.add_head(Rc::clone(&tracker));
    assert_eq!(Rc::strong_count(&tracker), 3);

    assert!(list.remove(&tracker));
    assert_eq!(Rc::strong_count(&tracker), 2);

    drop(list);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn test_custom_comparator() {
    let mut list = LinkedList::new(|stored: &String, probe: &String| {
        stored.eq_ignore_ascii_case(probe)
    });
    list.add_head("Alpha".to_string());
    list.add_head("beta".to_string());

    let found = list.search(&"ALPHA".to_string()).unwrap();
    assert_eq!(list.get(found).map(String::as_str), Some("Alpha"));
    assert!(list.remove(&"BETA".to_string()));
    assert_eq!(list.count(), 1);
}

#[test]
fn test_default_compares_with_eq() {
    let mut list = LinkedList::<u8>::default();
    list.add_head(b'a');
    assert!(list.contains(&b'a'));
    assert!(list.remove(&b'a'));
    assert!(list.is_empty());
}

#[test]
fn test_builder_capacity() {
    let mut list = LinkedList::<u64>::builder()
        .capacity(16)
        .compare_eq()
        .build();
    for i in 0..16 {
        list.add_head(i);
    }
    assert_eq!(list.count(), 16);
    assert_eq!(list.iter().next(), Some(&15));
}

#[test]
#[should_panic(expected = "no comparator configured for this list")]
fn test_search_without_comparator() {
    let mut list = LinkedListBuilder::<i32>::new().build();
    list.add_head(1);
    list.search(&1);
}

#[test]
#[should_panic(expected = "no comparator configured for this list")]
fn test_remove_without_comparator() {
    let mut list = LinkedListBuilder::<i32>::new().build();
    list.remove(&1);
}

#[test]
fn test_iteration_without_comparator() {
    let mut list = LinkedListBuilder::<i32>::new().build();
    list.add_head(1);
    list.add_head(2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
#[should_panic(expected = "element size must be non-zero")]
fn test_zero_sized_element_panics() {
    let _list = LinkedList::<()>::new(|_, _| true);
}
