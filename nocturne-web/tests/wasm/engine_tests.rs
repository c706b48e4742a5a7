use nocturne_core::{Activation, AllowList, SettingsStore, normalize_domain};
use nocturne_web::dom;
use nocturne_web::store::LocalSettings;

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_entry_means_empty_list_and_no_activation() {
    let storage = dom::local_storage().expect("localStorage");
    storage
        .remove_item(nocturne_core::STORAGE_KEY)
        .expect("clear stored list");

    let list = LocalSettings.load_allow_list().expect("load");
    assert!(list.is_empty());

    let href = dom::page_href().expect("href");
    assert_eq!(
        Activation::evaluate(&href, Ok::<_, std::convert::Infallible>(list)),
        Activation::Inactive
    );
}

#[wasm_bindgen_test]
fn saved_list_round_trips_and_activates_the_test_page() {
    let href = dom::page_href().expect("href");
    let mut list = AllowList::default();
    list.add(&href).expect("add current page host");
    LocalSettings.save_allow_list(&list).expect("save");

    let reloaded = LocalSettings.load_allow_list().expect("reload");
    assert_eq!(reloaded.entries(), [normalize_domain(&href)]);
    assert!(
        Activation::evaluate(&href, Ok::<_, std::convert::Infallible>(reloaded)).is_active()
    );
}

#[wasm_bindgen_test]
fn undecodable_stored_value_is_a_read_fault() {
    let storage = dom::local_storage().expect("localStorage");
    storage
        .set_item(nocturne_core::STORAGE_KEY, "not json")
        .expect("poison stored list");

    let loaded = LocalSettings.load_allow_list();
    assert!(loaded.is_err());

    let href = dom::page_href().expect("href");
    assert_eq!(Activation::evaluate(&href, loaded), Activation::Inactive);

    storage
        .remove_item(nocturne_core::STORAGE_KEY)
        .expect("clean up");
}
