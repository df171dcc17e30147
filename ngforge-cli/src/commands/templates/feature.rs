use super::Names;

/// `routes.ts` of a new feature module: a layout route whose `children`
/// receive the module's pages.
pub fn routes(names: &Names) -> String {
    let kebab = &names.kebab;
    let routes_const = names.routes_const();
    format!(
        r#"import {{ Routes }} from '@angular/router';
import {{ MainLayout }} from '../../layout/main-layout/main-layout';

export const {routes_const}: Routes = [
  {{
    path: '{kebab}',
    component: MainLayout,
    children: [
      // pages added with `ngforge page` go here
    ]
  }}
];
"#
    )
}

/// `routes.ts` of a module created by `init`, guarded and lazily laid out.
pub fn guarded_routes(names: &Names, guard_class: &str, guard_file: &str) -> String {
    let routes_const = names.routes_const();
    format!(
        r#"import {{ Routes }} from '@angular/router';
import {{ {guard_class} }} from '../../core/guards/{guard_file}';

export const {routes_const}: Routes = [
  {{
    path: '',
    loadComponent: () => import('../../layout/main-layout/main-layout').then(m => m.MainLayout),
    canActivate: [{guard_class}],
    children: []
  }}
];
"#
    )
}

/// Minimal `routes.ts` for a module that lost its own.
pub fn bare_routes(names: &Names) -> String {
    format!(
        "import {{ Routes }} from '@angular/router';\n\nexport const {}: Routes = [\n];\n",
        names.routes_const()
    )
}

pub fn readme(names: &Names) -> String {
    let Names { kebab, pascal, .. } = names;
    format!(
        r#"# {pascal} Module

## Structure
```
{kebab}/
├── components/     # components used only by this module
├── views/          # routed pages
├── models/         # interfaces and types
└── routes.ts       # route configuration
```

## Routes
- `/{kebab}` - module root

## Generators
```bash
ngforge page
ngforge component
ngforge model
```
"#
    )
}

pub fn page_ts(names: &Names) -> String {
    let Names { kebab, pascal, .. } = names;
    format!(
        r#"import {{ Component }} from '@angular/core';

@Component({{
  selector: 'app-{kebab}-page',
  standalone: true,
  templateUrl: './{kebab}.page.html',
  styleUrls: ['./{kebab}.page.scss'],
}})
export class {pascal}Page {{}}
"#
    )
}

pub fn page_html(names: &Names) -> String {
    format!("<p>app-{}-page works!</p>\n", names.kebab)
}

pub fn page_scss(names: &Names) -> String {
    format!("/* Styles for app-{}-page */\n", names.kebab)
}
