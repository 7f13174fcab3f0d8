//! Стартовая страница: приветствие и быстрые переходы по разделам меню.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::shared::navigation::{MenuItem, PageKey, MENU};
use leptos::prelude::*;

/// Раздел быстрых переходов
#[derive(Debug, Clone, PartialEq)]
pub struct QuickLinkSection {
    pub title: &'static str,
    /// (страница, иконка)
    pub links: Vec<(PageKey, &'static str)>,
}

/// Разделы из дерева меню: одиночные пункты верхнего уровня собираются
/// в "常用功能", группы дают по разделу. Неактивные пункты и сама
/// стартовая страница пропускаются.
pub fn quick_link_sections(menu: &[MenuItem]) -> Vec<QuickLinkSection> {
    let link = |item: &MenuItem| match item {
        MenuItem::Leaf { icon, .. } => item
            .target()
            .filter(|page| *page != PageKey::Dashboard)
            .map(|page| (page, *icon)),
        MenuItem::Group { .. } => None,
    };

    let mut common = QuickLinkSection {
        title: "常用功能",
        links: Vec::new(),
    };
    let mut groups = Vec::new();

    for item in menu {
        match item {
            MenuItem::Leaf { .. } => common.links.extend(link(item)),
            MenuItem::Group {
                title,
                enabled: true,
                children,
                ..
            } => {
                let links: Vec<_> = children.iter().filter_map(link).collect();
                if !links.is_empty() {
                    groups.push(QuickLinkSection { title: *title, links });
                }
            }
            MenuItem::Group { .. } => {}
        }
    }

    if !common.links.is_empty() {
        groups.insert(0, common);
    }
    groups
}

#[component]
pub fn ConsoleOverview() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let sections = quick_link_sections(&MENU);

    view! {
        <PageFrame page_id="d400_console_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="overview__welcome">
                <h1 class="overview__title">"欢迎使用出海星中台系统"</h1>
                <p class="overview__hint">"请点击左侧菜单或下方快捷入口进行操作"</p>
            </div>

            <div class="overview__sections">
                {sections
                    .into_iter()
                    .map(|section| view! {
                        <section class="overview__section">
                            <h2 class="overview__section-title">{section.title}</h2>
                            <div class="overview__links">
                                {section
                                    .links
                                    .into_iter()
                                    .map(|(page, icon_name)| view! {
                                        <div class="overview__link" on:click=move |_| ctx.open_page(page)>
                                            {icon(icon_name)}
                                            <span>{page.title()}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::menu;

    #[test]
    fn test_sections_follow_menu() {
        let sections = quick_link_sections(&menu());
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["常用功能", "财务管理", "电商管理", "物流管理", "仓储管理", "基础数据"]);

        assert_eq!(sections[0].links, vec![(PageKey::TaxAnalysis, "activity")]);
        // "库存管理" неактивен
        assert_eq!(sections[2].links, vec![(PageKey::Products, "shopping-cart")]);
    }

    #[test]
    fn test_dashboard_is_not_linked() {
        let all: Vec<PageKey> = quick_link_sections(&menu())
            .into_iter()
            .flat_map(|s| s.links.into_iter().map(|(page, _)| page))
            .collect();
        assert!(!all.contains(&PageKey::Dashboard));
        assert_eq!(all.len(), PageKey::all().len() - 1);
    }
}
