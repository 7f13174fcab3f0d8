pub mod state;

use self::state::{
    box_spec_cell_text, build_pairing_filter, create_state, dim, pcs_per_box_summary, pin_attrs,
    save_notice, DeleteTarget, ProductListState, CURRENT_OPERATOR, TAB_PAIRINGS, TAB_PRODUCTS,
};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::form_input::FormInput;
use crate::shared::components::notice::{NoticeHost, NoticeState};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a011_product::aggregate::{PairingStatus, Product, ProductSearchField};
use contracts::domain::a011_product::columns::{ColumnPin, ProductColumnId};
use contracts::domain::a011_product::form::{BoxSpecForm, ProductForm};
use contracts::shared::config::ConsoleConfig;
use contracts::shared::format::format_datetime;
use leptos::prelude::*;
use thaw::*;

/// Текстовое поле диалога, связанное с полем `ProductForm`
fn form_text(
    form: RwSignal<ProductForm>,
    label: &'static str,
    required: bool,
    get: fn(&ProductForm) -> &String,
    set: fn(&mut ProductForm) -> &mut String,
) -> impl IntoView {
    view! {
        <FormInput
            label=label
            required=required
            value=Signal::derive(move || form.with(|f| get(f).clone()))
            on_input=Callback::new(move |value: String| form.update(|f| *set(f) = value))
        />
    }
}

/// Ячейка строки "箱规" в диалоге
fn box_spec_cell(
    form: RwSignal<ProductForm>,
    index: usize,
    get: fn(&BoxSpecForm) -> &String,
    set: fn(&mut BoxSpecForm) -> &mut String,
) -> impl IntoView {
    view! {
        <td>
            <input
                class="form__input form__input--compact"
                prop:value=move || {
                    form.with(|f| f.box_specs.get(index).map(|spec| get(spec).clone()).unwrap_or_default())
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(spec) = f.box_specs.get_mut(index) {
                            *set(spec) = value;
                        }
                    });
                }
            />
        </td>
    }
}

fn is_truncated(column: ProductColumnId) -> bool {
    matches!(
        column,
        ProductColumnId::NameEn | ProductColumnId::NameCn | ProductColumnId::Remark
    )
}

/// Содержимое ячейки основной строки товара
fn product_cell(
    state: ProductListState,
    column: ProductColumnId,
    product: &Product,
    expanded: bool,
) -> AnyView {
    let catalog = state.catalog;
    let id = product.id;
    match column {
        ProductColumnId::Expand => {
            if product.box_specs.is_empty() {
                ().into_any()
            } else {
                view! {
                    <span
                        class="row-expander"
                        class:row-expander--open=expanded
                        on:click=move |_| catalog.update(|c| c.toggle_expand(id))
                    >
                        {icon("chevron-right")}
                    </span>
                }
                .into_any()
            }
        }
        ProductColumnId::Image => {
            if product.image_url.is_empty() {
                view! { <span class="product-thumb product-thumb--empty">{icon("image")}</span> }.into_any()
            } else {
                view! { <img class="product-thumb" src=product.image_url.clone() alt="" /> }.into_any()
            }
        }
        ProductColumnId::SupplierId => product.supplier_id.clone().into_any(),
        ProductColumnId::Upc => view! { <span class="cell--mono">{product.upc.clone()}</span> }.into_any(),
        ProductColumnId::SkuId => view! { <span class="cell--mono">{product.sku_id.clone()}</span> }.into_any(),
        ProductColumnId::BoxSku => product.box_sku_summary().into_any(),
        ProductColumnId::Brand => product.brand.clone().into_any(),
        ProductColumnId::NameEn => product.name_en.clone().into_any(),
        ProductColumnId::NameCn => product.name_cn.clone().into_any(),
        ProductColumnId::BoxSpecs => pcs_per_box_summary(product).into_any(),
        ProductColumnId::Weight => dim(product.weight).into_any(),
        ProductColumnId::Length => dim(product.length).into_any(),
        ProductColumnId::Width => dim(product.width).into_any(),
        ProductColumnId::Height => dim(product.height).into_any(),
        ProductColumnId::Remark => product.remark.clone().into_any(),
        ProductColumnId::Operator => product.operator.clone().into_any(),
        ProductColumnId::CreateTime => format_datetime(&product.create_time).into_any(),
        ProductColumnId::UpdateTime => format_datetime(&product.update_time).into_any(),
        ProductColumnId::Action => view! {
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| state.open_edit(id)
            >
                "编辑"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| state.ask_delete(DeleteTarget::Single(id))
            >
                "删除"
            </Button>
        }
        .into_any(),
    }
}

/// Диалог "列设置": видимость, порядок и закрепление колонок таблицы товаров
#[component]
fn ColumnSettingsDialog(state: ProductListState) -> impl IntoView {
    let catalog = state.catalog;
    let selected = Signal::derive(move || catalog.with(|c| c.columns.selected()));
    let no_selection = Signal::derive(move || selected.get().is_none());

    let move_selected = move |down: bool| {
        if let Some(column) = selected.get_untracked() {
            catalog.update(|c| {
                if down {
                    c.columns.move_down(column.id);
                } else {
                    c.columns.move_up(column.id);
                }
            });
        }
    };

    view! {
        <Dialog open=state.columns_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"商品管理-列设置"</DialogTitle>
                    <DialogContent>
                        <div class="info-box">
                            "提示：点击列名选中，点击复选框切换显示/隐藏，拖拽或上移/下移可调整顺序"
                        </div>

                        <div class="column-chips">
                            {move || {
                                catalog.with(|c| {
                                    let selected_id = c.columns.selected().map(|s| s.id);
                                    c.columns
                                        .columns()
                                        .iter()
                                        .enumerate()
                                        .map(|(index, column)| {
                                            let id = column.id;
                                            let visible = column.visible;
                                            view! {
                                                <div
                                                    class="column-chip"
                                                    class:column-chip--selected=selected_id == Some(id)
                                                    class:column-chip--hidden=!visible
                                                    class:column-chip--dragging=move || {
                                                        state.dragged_column.get() == Some(id)
                                                    }
                                                    draggable="true"
                                                    on:click=move |_| catalog.update(|c| c.columns.select(id))
                                                    on:dragstart=move |_| state.dragged_column.set(Some(id))
                                                    on:dragenter=move |_| state.drag_over.set(Some(index))
                                                    on:dragover=move |ev| ev.prevent_default()
                                                    on:dragend=move |_| state.finish_column_drag()
                                                >
                                                    <span
                                                        class="column-chip__check"
                                                        class:column-chip__check--on=visible
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            catalog.update(|c| c.columns.toggle_visible(id));
                                                        }
                                                    >
                                                        {visible.then(|| icon("check"))}
                                                    </span>
                                                    <span class="column-chip__label">{id.label()}</span>
                                                    {column.pinned.map(|pin| view! {
                                                        <span class="column-chip__pin">{pin.short_name()}</span>
                                                    })}
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </div>

                        <div class="form__section">
                            <div class="form__section-header">
                                <span class="form__section-title">
                                    {move || {
                                        let label = selected.get().map(|c| c.id.label()).unwrap_or("无");
                                        format!("当前选中: {}", label)
                                    }}
                                </span>
                                <Flex align=FlexAlign::Center>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        disabled=no_selection
                                        on_click=move |_| move_selected(false)
                                    >
                                        "上移"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        disabled=no_selection
                                        on_click=move |_| move_selected(true)
                                    >
                                        "下移"
                                    </Button>
                                </Flex>
                            </div>
                            <Flex align=FlexAlign::Center>
                                {move || {
                                    let current = selected.get().and_then(|c| c.pinned);
                                    [
                                        (None, "不固定"),
                                        (Some(ColumnPin::Left), ColumnPin::Left.display_name()),
                                        (Some(ColumnPin::Right), ColumnPin::Right.display_name()),
                                    ]
                                    .into_iter()
                                    .map(|(pin, label)| {
                                        let appearance = if current == pin {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        };
                                        view! {
                                            <Button
                                                appearance=appearance
                                                size=ButtonSize::Small
                                                disabled=no_selection
                                                on_click=move |_| {
                                                    if let Some(column) = selected.get_untracked() {
                                                        catalog.update(|c| c.columns.set_pin(column.id, pin));
                                                    }
                                                }
                                            >
                                                {label}
                                            </Button>
                                        }
                                    })
                                    .collect_view()
                                }}
                            </Flex>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| catalog.update(|c| c.columns.reset())
                        >
                            {icon("refresh")}
                            " 重置为默认"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| state.columns_open.set(false)
                        >
                            "关闭"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn ProductsTab(state: ProductListState) -> impl IntoView {
    let catalog = state.catalog;

    let selected_count = Signal::derive(move || catalog.with(|c| c.products.selected_count()));
    let all_checked = Signal::derive(move || catalog.with(|c| c.products.all_visible_selected()));
    let some_checked = Signal::derive(move || selected_count.get() > 0);
    let on_toggle_all = Callback::new(move |value: bool| {
        catalog.update(|c| c.products.set_all_visible(value));
    });
    let active_filters = Signal::derive(move || catalog.with(|c| c.products.active_filters_count()));
    let summary = Signal::derive(move || {
        catalog.with(|c| {
            format!("共 {} 条, 已选 {} 条", c.products.visible().len(), c.products.selected_count())
        })
    });

    view! {
        <FilterPanel
            is_expanded=state.is_filter_expanded
            active_filters_count=active_filters
            summary=summary
            on_search=Callback::new(move |_| state.search())
            on_reset=Callback::new(move |_| state.reset())
        >
            <FilterField label="产品信息" width="140px">
                <Select value=state.search_field>
                    {ProductSearchField::all()
                        .into_iter()
                        .map(|f| view! { <option value=f.code()>{f.display_name()}</option> })
                        .collect_view()}
                </Select>
            </FilterField>
            <FilterField label="搜索内容" width="220px">
                <Input value=state.search_value placeholder="输入搜索内容..." />
            </FilterField>
            <FilterField label="创建时间从" width="160px">
                <DateInput value=state.created_from />
            </FilterField>
            <FilterField label="至" width="160px">
                <DateInput value=state.created_to />
            </FilterField>
        </FilterPanel>

        <div class="table-wrapper">
            <Table attr:id="a011-product-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            checked=all_checked
                            indeterminate=some_checked
                            on_change=on_toggle_all
                        />
                        {move || {
                            catalog.with(|c| {
                                c.columns
                                    .visible()
                                    .into_iter()
                                    .map(|column| {
                                        let (class, style) = pin_attrs(
                                            column.pinned,
                                            c.columns.left_offset(column.id),
                                        );
                                        view! {
                                            <TableHeaderCell
                                                resizable=false
                                                min_width=column.id.min_width()
                                                class=class
                                                attr:style=style
                                            >
                                                {column.id.label()}
                                            </TableHeaderCell>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let (columns, rows) = catalog.with(|c| {
                            let columns = c
                                .columns
                                .visible()
                                .into_iter()
                                .map(|column| (column, c.columns.left_offset(column.id)))
                                .collect::<Vec<_>>();
                            let rows = c
                                .products
                                .visible()
                                .into_iter()
                                .map(|p| (p.clone(), c.is_expanded(p.id)))
                                .collect::<Vec<_>>();
                            (columns, rows)
                        });
                        rows.into_iter()
                            .map(|(product, expanded)| {
                                let id = product.id;
                                let checked = Signal::derive(move || catalog.with(|c| c.products.is_selected(id)));
                                let on_check = Callback::new(move |value: bool| {
                                    catalog.update(|c| c.products.set_selected(id, value));
                                });
                                let cells = columns
                                    .iter()
                                    .map(|(column, offset)| {
                                        let (class, style) = pin_attrs(column.pinned, *offset);
                                        let cell = product_cell(state, column.id, &product, expanded);
                                        let truncate = is_truncated(column.id);
                                        view! {
                                            <TableCell class=class attr:style=style>
                                                <TableCellLayout truncate=truncate>
                                                    {cell}
                                                </TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view();
                                let spec_rows = if expanded {
                                    product
                                        .box_specs
                                        .iter()
                                        .map(|spec| {
                                            let spec_cells = columns
                                                .iter()
                                                .map(|(column, offset)| {
                                                    let (class, style) = pin_attrs(column.pinned, *offset);
                                                    let cell_text = box_spec_cell_text(column.id, &product, spec);
                                                    view! {
                                                        <TableCell class=class attr:style=style>
                                                            <TableCellLayout>
                                                                {cell_text}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    }
                                                })
                                                .collect_view();
                                            view! {
                                                <TableRow class="table__row--nested">
                                                    <TableCell>""</TableCell>
                                                    {spec_cells}
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                } else {
                                    ().into_any()
                                };
                                view! {
                                    <TableRow class:table__row--selected=move || checked.get()>
                                        <TableCellCheckbox checked=checked on_change=on_check />
                                        {cells}
                                    </TableRow>
                                    {spec_rows}
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn PairingsTab(state: ProductListState) -> impl IntoView {
    let catalog = state.catalog;

    Effect::new(move |_| {
        let filter = build_pairing_filter(&state.pairing_query.get(), &state.pairing_status.get());
        catalog.update(|c| c.pairings.set_filter(filter));
    });

    let all_checked = Signal::derive(move || catalog.with(|c| c.pairings.all_visible_selected()));
    let some_checked = Signal::derive(move || catalog.with(|c| c.pairings.selected_count() > 0));
    let on_toggle_all = Callback::new(move |value: bool| {
        catalog.update(|c| c.pairings.set_all_visible(value));
    });
    let active_filters = Signal::derive(move || catalog.with(|c| c.pairings.active_filters_count()));
    let summary = Signal::derive(move || {
        catalog.with(|c| {
            format!("共 {} 条, 已选 {} 条", c.pairings.visible().len(), c.pairings.selected_count())
        })
    });

    view! {
        <FilterPanel
            is_expanded=state.is_filter_expanded
            active_filters_count=active_filters
            summary=summary
            on_reset=Callback::new(move |_| {
                state.pairing_query.set(String::new());
                state.pairing_status.set(String::new());
            })
        >
            <FilterField label="条码/店铺SKU/品名" width="240px">
                <Input value=state.pairing_query placeholder="输入搜索内容..." />
            </FilterField>
            <FilterField label="状态" width="120px">
                <Select value=state.pairing_status>
                    <option value="">"全部"</option>
                    {PairingStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </Select>
            </FilterField>
        </FilterPanel>

        <div class="table-wrapper">
            <Table attr:id="a011-pairing-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            checked=all_checked
                            indeterminate=some_checked
                            on_change=on_toggle_all
                        />
                        <TableHeaderCell resizable=false min_width=90.0>"供应商标识"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=130.0>"商品条码"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=130.0>"店铺SKU"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=200.0>"品名"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=90.0>"平台"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"店铺"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"状态"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"操作人"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=150.0>"创建时间"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=150.0>"操作时间"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = catalog.with(|c| {
                            c.pairings.visible().into_iter().cloned().collect::<Vec<_>>()
                        });
                        rows.into_iter()
                            .map(|pairing| {
                                let id = pairing.id;
                                let checked = Signal::derive(move || catalog.with(|c| c.pairings.is_selected(id)));
                                let on_check = Callback::new(move |value: bool| {
                                    catalog.update(|c| c.pairings.set_selected(id, value));
                                });
                                let color = match pairing.status {
                                    PairingStatus::OnSale => BadgeColor::Success,
                                    PairingStatus::OffSale => BadgeColor::Danger,
                                };
                                view! {
                                    <TableRow class:table__row--selected=move || checked.get()>
                                        <TableCellCheckbox checked=checked on_change=on_check />
                                        <TableCell><TableCellLayout>{pairing.supplier_id}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout><span class="cell--mono">{pairing.upc}</span></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout><span class="cell--mono">{pairing.shop_sku}</span></TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout truncate=true>{pairing.product_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{pairing.platform}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{pairing.shop_name}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge appearance=BadgeAppearance::Tint color=color>
                                                    {pairing.status.display_name()}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{pairing.operator}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_datetime(&pairing.create_time)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_datetime(&pairing.update_time)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let state = create_state(&config.catalog);
    let catalog = state.catalog;
    let form = state.form;
    let notice = NoticeState::new();

    let selected_count = Signal::derive(move || catalog.with(|c| c.products.selected_count()));
    let spec_rows = Memo::new(move |_| form.with(|f| f.box_specs.len()));

    let save = move |_| {
        let now = chrono::Local::now().naive_local();
        let draft = form.get_untracked();
        match catalog.try_update(|c| c.save(&draft, CURRENT_OPERATOR, now)) {
            Some(Ok(outcome)) => {
                let (title, text) = save_notice(&outcome);
                notice.success(title, text);
                state.form_open.set(false);
            }
            Some(Err(e)) => notice.error("保存失败", e.to_string()),
            None => {}
        }
    };

    let delete_message = Signal::derive(move || match state.delete_target.get() {
        Some(DeleteTarget::Single(_)) => "确定删除该商品吗？此操作不可恢复。".to_string(),
        Some(DeleteTarget::Selected) => {
            format!("确定删除选中的 {} 个商品吗？此操作不可恢复。", selected_count.get())
        }
        None => String::new(),
    });

    let confirm_delete = Callback::new(move |_| {
        match state.delete_target.get_untracked() {
            Some(DeleteTarget::Single(id)) => match catalog.try_update(|c| c.delete(id)) {
                Some(Ok(_)) => notice.success("删除成功", "商品已删除"),
                Some(Err(e)) => notice.error("删除失败", e.to_string()),
                None => {}
            },
            Some(DeleteTarget::Selected) => {
                let removed = catalog.try_update(|c| c.delete_selected()).unwrap_or(0);
                log::info!("products deleted: {}", removed);
                notice.success("删除成功", format!("已删除 {} 个商品", removed));
            }
            None => {}
        }
        state.delete_target.set(None);
    });

    view! {
        <PageFrame page_id="a011_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"商品管理"</h1>
                    <span class="page__subtitle">"商品信息、箱规与店铺配对"</span>
                </div>
                <div class="page__header-right">
                    <Show when=move || state.tab.get() == TAB_PRODUCTS>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || selected_count.get() == 0)
                            on_click=move |_| state.ask_delete(DeleteTarget::Selected)
                        >
                            {icon("delete")}
                            {move || format!(" 批量删除 ({})", selected_count.get())}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.columns_open.set(true)>
                            {icon("settings")}
                            " 列设置"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| state.open_create()>
                            {icon("plus")}
                            " 新增商品"
                        </Button>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <NoticeHost state=notice />

                <TabList selected_value=state.tab>
                    <Tab value=TAB_PRODUCTS>"商品"</Tab>
                    <Tab value=TAB_PAIRINGS>"产品配对"</Tab>
                </TabList>

                {move || {
                    if state.tab.get() == TAB_PAIRINGS {
                        view! { <PairingsTab state=state /> }.into_any()
                    } else {
                        view! { <ProductsTab state=state /> }.into_any()
                    }
                }}
            </div>

            <Dialog open=state.form_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || if form.with(|f| f.is_edit()) { "编辑商品" } else { "新增商品" }}
                        </DialogTitle>
                        <DialogContent>
                            <div class="form__grid">
                                {form_text(form, "供应商标识", true, |f| &f.supplier_id, |f| &mut f.supplier_id)}
                                {form_text(form, "商品条码", true, |f| &f.upc, |f| &mut f.upc)}
                                {form_text(form, "商品编码", true, |f| &f.sku_id, |f| &mut f.sku_id)}
                                {form_text(form, "品牌", false, |f| &f.brand, |f| &mut f.brand)}
                                {form_text(form, "英文商品名称", true, |f| &f.name_en, |f| &mut f.name_en)}
                                {form_text(form, "中文商品名称", true, |f| &f.name_cn, |f| &mut f.name_cn)}
                                {form_text(form, "图片链接", false, |f| &f.image_url, |f| &mut f.image_url)}
                                {form_text(form, "重量/KG", false, |f| &f.weight, |f| &mut f.weight)}
                                {form_text(form, "长/CM", false, |f| &f.length, |f| &mut f.length)}
                                {form_text(form, "宽/CM", false, |f| &f.width, |f| &mut f.width)}
                                {form_text(form, "高/CM", false, |f| &f.height, |f| &mut f.height)}
                                {form_text(form, "备注", false, |f| &f.remark, |f| &mut f.remark)}
                            </div>

                            <div class="form__section">
                                <div class="form__section-header">
                                    <span class="form__section-title">"箱规信息"</span>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| form.update(|f| f.add_box_spec_row())
                                    >
                                        {icon("plus")}
                                        " 添加箱规"
                                    </Button>
                                </div>
                                <table class="nested-table">
                                    <thead>
                                        <tr>
                                            <th>"箱规编码"</th>
                                            <th>"每箱数量"</th>
                                            <th>"长/CM"</th>
                                            <th>"宽/CM"</th>
                                            <th>"高/CM"</th>
                                            <th>"重量/KG"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            (0..spec_rows.get())
                                                .map(|index| view! {
                                                    <tr>
                                                        {box_spec_cell(form, index, |s| &s.box_sku_id, |s| &mut s.box_sku_id)}
                                                        {box_spec_cell(form, index, |s| &s.pcs_per_box, |s| &mut s.pcs_per_box)}
                                                        {box_spec_cell(form, index, |s| &s.length, |s| &mut s.length)}
                                                        {box_spec_cell(form, index, |s| &s.width, |s| &mut s.width)}
                                                        {box_spec_cell(form, index, |s| &s.height, |s| &mut s.height)}
                                                        {box_spec_cell(form, index, |s| &s.weight, |s| &mut s.weight)}
                                                        <td>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                size=ButtonSize::Small
                                                                on_click=move |_| form.update(|f| f.remove_box_spec_row(index))
                                                            >
                                                                {icon("delete")}
                                                            </Button>
                                                        </td>
                                                    </tr>
                                                })
                                                .collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.form_open.set(false)
                            >
                                "取消"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=save>
                                "保存"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <ColumnSettingsDialog state=state />

            <ConfirmDialog
                open=state.confirm_delete_open
                title="删除商品"
                message=delete_message
                confirm_label="删除"
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
